//! Schema IR — the introspected output types the generator reads.
//!
//! Deserialised from the introspection JSON (`{"outputTypes": [...]}`).
//! Read-only: the generator never mutates it.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Complete introspected schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub output_types: Vec<SchemaModel>,
}

impl Schema {
    /// Parse the introspection JSON.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// One named object output type (a model, or a built-in root/aggregate type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub name: String,
    pub output_type: OutputType,
    #[serde(default)]
    pub args: Vec<FieldArg>,
}

/// The type a field resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputType {
    pub kind: TypeKind,

    /// Type name (e.g. `Int`, `DateTime`, `Post`).
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub is_list: bool,

    #[serde(default)]
    pub is_required: bool,
}

impl OutputType {
    /// Scalar other than `DateTime`: rendered with the library's scalar builder.
    pub fn is_plain_scalar(&self) -> bool {
        self.kind == TypeKind::Scalar && self.type_name != DATE_TIME
    }
}

/// Name of the scalar the target library has no built-in builder for.
pub const DATE_TIME: &str = "DateTime";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Scalar,
    Object,
    Enum,
    /// Any kind this generator has no special handling for.
    #[serde(untagged)]
    Other(String),
}

/// A field argument; only the first input-type candidate is used when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldArg {
    pub name: String,
    #[serde(default)]
    pub input_type: Vec<InputTypeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTypeRef {
    #[serde(rename = "type")]
    pub type_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_introspection_json() {
        let json = r#"{
            "outputTypes": [{
                "name": "User",
                "fields": [
                    {"name": "id", "outputType": {"kind": "scalar", "type": "Int", "isRequired": true, "isList": false}},
                    {"name": "posts", "outputType": {"kind": "object", "type": "Post", "isRequired": true, "isList": true},
                     "args": [{"name": "where", "inputType": [{"type": "PostWhereInput"}]}]},
                    {"name": "role", "outputType": {"kind": "enum", "type": "Role"}},
                    {"name": "weird", "outputType": {"kind": "union", "type": "Weird"}}
                ]
            }]
        }"#;

        let schema = Schema::from_json(json).unwrap();
        let user = &schema.output_types[0];
        assert_eq!(user.name, "User");
        assert_eq!(user.fields.len(), 4);
        assert_eq!(user.fields[0].output_type.kind, TypeKind::Scalar);
        assert!(user.fields[0].args.is_empty());
        assert!(user.fields[1].output_type.is_list);
        assert_eq!(user.fields[1].args[0].input_type[0].type_name, "PostWhereInput");
        assert_eq!(user.fields[2].output_type.kind, TypeKind::Enum);
        assert!(!user.fields[2].output_type.is_required);
        assert_eq!(
            user.fields[3].output_type.kind,
            TypeKind::Other("union".to_string())
        );
    }

    #[test]
    fn date_time_is_not_plain_scalar() {
        let ty = OutputType {
            kind: TypeKind::Scalar,
            type_name: "DateTime".into(),
            is_list: false,
            is_required: true,
        };
        assert!(!ty.is_plain_scalar());

        let ty = OutputType { type_name: "String".into(), ..ty };
        assert!(ty.is_plain_scalar());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Schema::from_json("{\"outputTypes\": 3}").is_err());
    }
}
