//! Contract ABI argument entries and their expansion into type signatures.
//!
//! ABI definitions describe tuples structurally: the type string is just
//! `tuple` (optionally followed by array suffixes) and the members live in
//! `components`. The adapter flattens that into a single signature such as
//! `tuple(a uint256,b address[])[]` for the parser.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AbiError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Argument>,
    #[serde(rename = "internalType", default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
}

impl Argument {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            components: Vec::new(),
            internal_type: None,
            indexed: None,
        }
    }

    pub fn with_components(mut self, components: Vec<Argument>) -> Self {
        self.components = components;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_tuple(&self) -> bool {
        self.type_name.starts_with("tuple")
    }
}

/// Accepts either a single argument object or an array of them.
pub fn arguments_from_json(json: &str) -> Result<Vec<Argument>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Argument>),
        One(Argument),
    }

    match serde_json::from_str(json)? {
        OneOrMany::Many(args) => Ok(args),
        OneOrMany::One(arg) => Ok(vec![arg]),
    }
}

/// Expand an argument into the signature string understood by the parser.
pub fn canonical_type_string(arg: &Argument) -> Result<String> {
    if !arg.is_tuple() {
        return Ok(arg.type_name.clone());
    }
    let suffix = &arg.type_name["tuple".len()..];

    if arg.components.is_empty() {
        return Err(AbiError::MissingComponents {
            argument: arg.name.clone(),
        });
    }

    let mut parts = Vec::with_capacity(arg.components.len());
    for component in &arg.components {
        let expanded = canonical_type_string(component)?;
        parts.push(format!("{} {}", component.name, expanded));
    }

    let signature = format!("tuple({}){}", parts.join(","), suffix);
    debug!(argument = %arg.name, signature = %signature, "expanded tuple argument");
    Ok(signature)
}
