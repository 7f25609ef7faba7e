//! Parse contract ABI type signatures into layout-aware type descriptors.

pub mod argument;
pub mod config;
pub mod error;
pub mod layout;
pub mod lexer;
pub mod native;
pub mod parser;
pub mod report;
pub mod types;

pub use argument::{arguments_from_json, canonical_type_string, Argument};
pub use config::{ConfigError, ParserConfig};
pub use error::{AbiError, Result};
pub use layout::{encoded_size, is_dynamic, WORD_SIZE};
pub use native::NativeHint;
pub use parser::{decode_simple_type, parse_type, parse_type_with};
pub use report::{to_json, to_yaml, NamedReport, TypeReport};
pub use types::{function_signature, Kind, TupleField, Type, TypeShape};
