//! Recursive-descent parser for ABI type signatures.
//!
//! Grammar (whitespace between tokens is ignored, except before `[`):
//!
//! ```text
//! type    := base suffix*
//! base    := "tuple" group | group | ident
//! group   := "(" field ("," field)* ")"
//! field   := ident type | type
//! suffix  := "[" number? "]"
//! ```
//!
//! A bare `group` is the canonical rendering of a tuple, so every canonical
//! string parses back to an equal descriptor.

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{AbiError, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::types::{TupleField, Type};

/// Parse a type signature with the default limits.
pub fn parse_type(signature: &str) -> Result<Type> {
    parse_type_with(signature, &ParserConfig::default())
}

pub fn parse_type_with(signature: &str, config: &ParserConfig) -> Result<Type> {
    let mut parser = Parser {
        lexer: Lexer::new(signature),
        max_depth: config.max_depth,
    };
    let ty = parser.read_type(1)?;
    parser.expect_end()?;

    debug!(signature, canonical = ty.canonical(), "parsed type signature");
    Ok(ty)
}

/// Resolve a base type name such as `uint256`, `bytes`, `bytes32` or `address`.
pub fn decode_simple_type(name: &str) -> Result<Type> {
    let split = name
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(name.len());
    let (prefix, suffix) = name.split_at(split);
    if prefix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AbiError::MalformedType(name.to_string()));
    }

    let width = if suffix.is_empty() {
        None
    } else {
        let value = suffix
            .parse::<u32>()
            .map_err(|e| AbiError::bad_width(name, format!("cannot read size: {}", e)))?;
        Some(value)
    };

    match (prefix, width) {
        ("uint", Some(bits)) => Type::uint(bits),
        ("int", Some(bits)) => Type::int(bits),
        ("uint" | "int", None) => Err(AbiError::bad_width(
            name,
            "integer types require a bit width",
        )),
        ("bytes", None) => Ok(Type::bytes()),
        ("bytes", Some(size)) => Type::fixed_bytes(size),
        ("byte", None) => Type::fixed_bytes(1),
        ("string", None) => Ok(Type::string()),
        ("bool", None) => Ok(Type::bool()),
        ("address", None) => Ok(Type::address()),
        ("function", None) => Ok(Type::function()),
        ("byte" | "string" | "bool" | "address" | "function", Some(_)) => Err(AbiError::bad_width(
            name,
            format!("type {} does not expect a size", prefix),
        )),
        _ => Err(AbiError::UnknownType(name.to_string())),
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn read_type(&mut self, depth: usize) -> Result<Type> {
        let tok = self.lexer.next_token();
        self.read_type_from(tok, depth)
    }

    /// Continue parsing a type whose first token was already consumed.
    fn read_type_from(&mut self, tok: Token<'a>, depth: usize) -> Result<Type> {
        self.check_depth(depth)?;

        let base = match tok.kind {
            TokenKind::Tuple => {
                self.expect(TokenKind::LParen)?;
                self.read_group(depth)?
            }
            TokenKind::LParen => self.read_group(depth)?,
            TokenKind::Ident => decode_simple_type(tok.literal)?,
            TokenKind::Invalid => return Err(lex_error(tok)),
            _ => return Err(unexpected(tok, "a type name")),
        };

        self.read_array_suffixes(base, depth)
    }

    /// Fields of a tuple, after the opening `(` up to and including `)`.
    fn read_group(&mut self, depth: usize) -> Result<Type> {
        let mut tok = self.lexer.next_token();
        if tok.kind == TokenKind::RParen {
            return Err(AbiError::TupleArity);
        }

        let mut fields = Vec::new();
        loop {
            fields.push(self.read_field(tok, depth + 1)?);

            let next = self.lexer.next_token();
            match next.kind {
                TokenKind::Comma => tok = self.lexer.next_token(),
                TokenKind::RParen => break,
                TokenKind::Invalid => return Err(lex_error(next)),
                _ => return Err(unexpected(next, "',' or ')'")),
            }
        }

        Type::tuple(fields)
    }

    fn read_field(&mut self, tok: Token<'a>, depth: usize) -> Result<TupleField> {
        // An identifier directly followed by another type is the field name.
        if tok.kind == TokenKind::Ident && self.lexer.next_starts_type() {
            let ty = self.read_type(depth)?;
            return Ok(TupleField::new(tok.literal, ty));
        }

        let ty = self.read_type_from(tok, depth)?;
        Ok(TupleField::new("", ty))
    }

    fn read_array_suffixes(&mut self, mut ty: Type, mut depth: usize) -> Result<Type> {
        // Only the raw next byte counts: `uint256 [2]` is not an array.
        while self.lexer.current() == Some(b'[') {
            self.lexer.next_token();
            depth += 1;
            self.check_depth(depth)?;

            let tok = self.lexer.next_token();
            ty = match tok.kind {
                TokenKind::RBracket => Type::slice(ty),
                TokenKind::Number => {
                    let size = tok
                        .literal
                        .parse::<u32>()
                        .map_err(|e| AbiError::bad_array_size(tok.literal, e.to_string()))?;

                    let close = self.lexer.next_token();
                    if close.kind != TokenKind::RBracket {
                        return Err(AbiError::bad_array_size(
                            tok.literal,
                            format!("unterminated length, expected ']' but found '{}'", close),
                        ));
                    }
                    Type::array(ty, size as usize)?
                }
                TokenKind::Invalid => return Err(lex_error(tok)),
                _ => {
                    return Err(AbiError::bad_array_size(
                        tok.to_string(),
                        "expected a number or ']'",
                    ))
                }
            };
        }

        Ok(ty)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>> {
        let tok = self.lexer.next_token();
        if tok.kind == kind {
            return Ok(tok);
        }
        match tok.kind {
            TokenKind::Invalid => Err(lex_error(tok)),
            _ => Err(unexpected(tok, &format!("'{}'", kind))),
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        let tok = self.lexer.next_token();
        match tok.kind {
            TokenKind::Eof => Ok(()),
            TokenKind::Invalid => Err(lex_error(tok)),
            _ => Err(unexpected(tok, "end of input")),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(AbiError::TooDeep {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

fn lex_error(tok: Token<'_>) -> AbiError {
    AbiError::Lex {
        found: tok.literal.chars().next().unwrap_or('\0'),
        offset: tok.offset,
    }
}

fn unexpected(tok: Token<'_>, expected: &str) -> AbiError {
    AbiError::UnexpectedToken {
        found: tok.to_string(),
        expected: expected.to_string(),
    }
}
