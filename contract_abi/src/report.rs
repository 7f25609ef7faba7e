//! Serializable description of a type descriptor tree.
//!
//! Produces JSON/YAML views of a parsed type for tooling and documentation.

use serde::Serialize;

use crate::native::NativeHint;
use crate::types::{Kind, Type};

#[derive(Debug, Clone, Serialize)]
pub struct TypeReport {
    pub canonical: String,
    pub kind: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_size: Option<usize>,
    pub dynamic: bool,
    pub encoded_size: usize,
    pub native_hint: NativeHint,
    pub host_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Box<TypeReport>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeReport,
}

/// A report for a named signature, e.g. one argument of an ABI entry.
#[derive(Debug, Clone, Serialize)]
pub struct NamedReport {
    pub name: String,
    pub signature: String,
    #[serde(rename = "type")]
    pub ty: TypeReport,
}

impl TypeReport {
    pub fn from_type(ty: &Type) -> Self {
        let width = match ty.width() {
            0 => None,
            w => Some(w),
        };
        Self {
            canonical: ty.canonical().to_string(),
            kind: ty.kind(),
            width,
            array_size: ty.array_size(),
            dynamic: ty.is_dynamic(),
            encoded_size: ty.encoded_size(),
            native_hint: ty.native_hint(),
            host_type: ty.native_hint().host_type().to_string(),
            element: ty.element().map(|e| Box::new(TypeReport::from_type(e))),
            fields: ty
                .fields()
                .iter()
                .map(|f| FieldReport {
                    name: f.name.clone(),
                    ty: TypeReport::from_type(&f.ty),
                })
                .collect(),
        }
    }
}

impl NamedReport {
    pub fn new(name: impl Into<String>, signature: impl Into<String>, ty: &Type) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            ty: TypeReport::from_type(ty),
        }
    }
}

/// Serialize a report to YAML string
pub fn to_yaml<T: Serialize>(report: &T) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(report)
}

/// Serialize a report to JSON string
pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
