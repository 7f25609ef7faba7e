//! Tokenizer for ABI type signatures.
//!
//! The lexer works on raw bytes and keeps a single byte of lookahead: the
//! byte under the cursor. The parser inspects that byte directly to detect
//! array suffixes, so no token buffering is needed.

use std::fmt;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Number,
    Tuple,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Eof,
    Invalid,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::Tuple => "tuple",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Eof => "end of input",
            TokenKind::Invalid => "<invalid>",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub literal: &'a str,
    pub offset: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{}", self.kind),
            _ => write!(f, "{}", self.literal),
        }
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The byte under the cursor, `None` once the input is exhausted.
    pub fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Whether the next non-blank byte can start a type: an identifier or `(`.
    /// Does not move the cursor.
    pub fn next_starts_type(&self) -> bool {
        self.input.as_bytes()[self.pos..]
            .iter()
            .find(|&&b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
            .map_or(false, |&b| is_letter(b) || b == b'(')
    }

    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let start = self.pos;
        let kind = match self.current() {
            None => {
                return Token {
                    kind: TokenKind::Eof,
                    literal: "",
                    offset: start,
                }
            }
            Some(b',') => TokenKind::Comma,
            Some(b'(') => TokenKind::LParen,
            Some(b')') => TokenKind::RParen,
            Some(b'[') => TokenKind::LBracket,
            Some(b']') => TokenKind::RBracket,
            Some(ch) if is_letter(ch) => {
                self.eat_while(|c| is_letter(c) || c.is_ascii_digit());
                let literal = &self.input[start..self.pos];
                let kind = if literal == "tuple" {
                    TokenKind::Tuple
                } else {
                    TokenKind::Ident
                };
                return self.emit(kind, start);
            }
            Some(ch) if ch.is_ascii_digit() => {
                self.eat_while(|c| c.is_ascii_digit());
                return self.emit(TokenKind::Number, start);
            }
            Some(_) => {
                // Consume the whole character so the literal stays valid UTF-8.
                let width = self.input[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.pos += width;
                return self.emit(TokenKind::Invalid, start);
            }
        };

        self.pos += 1;
        self.emit(kind, start)
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current().map_or(false, &pred) {
            self.pos += 1;
        }
    }

    fn emit(&self, kind: TokenKind, start: usize) -> Token<'a> {
        let token = Token {
            kind,
            literal: &self.input[start..self.pos],
            offset: start,
        };
        trace!(kind = %token.kind, literal = token.literal, offset = start, "token");
        token
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            out.push(tok.kind);
            if tok.kind == TokenKind::Eof {
                break;
            }
        }
        out
    }

    #[test]
    fn test_punctuation_and_identifiers() {
        use TokenKind::*;
        assert_eq!(
            kinds("tuple(a uint256,b bytes32[])[3]"),
            vec![
                Tuple, LParen, Ident, Ident, Comma, Ident, Ident, LBracket, RBracket, RParen,
                LBracket, Number, RBracket, Eof
            ]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let mut lexer = Lexer::new(" \t\r\n uint8 \n");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "uint8");
        assert_eq!(tok.offset, 5);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_tuple_keyword_is_exact() {
        let mut lexer = Lexer::new("tuples _tuple tuple");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token().kind, TokenKind::Tuple);
    }

    #[test]
    fn test_number_then_identifier() {
        let mut lexer = Lexer::new("12ab");
        let num = lexer.next_token();
        assert_eq!((num.kind, num.literal), (TokenKind::Number, "12"));
        let ident = lexer.next_token();
        assert_eq!((ident.kind, ident.literal), (TokenKind::Ident, "ab"));
    }

    #[test]
    fn test_invalid_characters() {
        let mut lexer = Lexer::new("$é");
        let dollar = lexer.next_token();
        assert_eq!((dollar.kind, dollar.literal), (TokenKind::Invalid, "$"));
        let accent = lexer.next_token();
        assert_eq!((accent.kind, accent.literal), (TokenKind::Invalid, "é"));
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.current(), None);
    }

    #[test]
    fn test_lookahead_does_not_move_cursor() {
        let mut lexer = Lexer::new("uint8 [2]");
        lexer.next_token();
        assert_eq!(lexer.current(), Some(b' '));
        assert!(!lexer.next_starts_type());
        assert_eq!(lexer.current(), Some(b' '));

        let mut named = Lexer::new("a  uint8");
        named.next_token();
        assert!(named.next_starts_type());
        assert_eq!(named.offset(), 1);
    }
}
