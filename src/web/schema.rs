//! Declared parameter/return shapes for the report endpoints.
//!
//! Responses are static serde structs; each endpoint additionally publishes
//! an explicit description of its wire contract: field names, types,
//! required-ness, and a human-readable description per field. The shapes are
//! built once (`LazyLock` in the dto modules) and the validator below checks
//! emitted JSON against them element-for-element.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Integer ids and unix timestamps.
    Int,
    /// Marks; emitted as-is, no rounding.
    Float,
    /// Display strings, escaped for safe embedding.
    Text,
    /// Pre-rendered rich text, not further transformable.
    Raw,
}

impl FieldType {
    fn name(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Raw => "raw",
        }
    }
}

#[derive(Debug)]
pub struct Scalar {
    field_type: FieldType,
    description: &'static str,
    required: bool,
}

#[derive(Debug)]
pub struct ListShape {
    description: &'static str,
    required: bool,
    element: Box<Shape>,
}

#[derive(Debug)]
pub struct RecordShape {
    fields: Vec<(&'static str, Shape)>,
}

#[derive(Debug)]
pub enum Shape {
    Scalar(Scalar),
    List(ListShape),
    Record(RecordShape),
}

impl Shape {
    pub fn int(description: &'static str) -> Self {
        Self::scalar(FieldType::Int, description)
    }

    pub fn float(description: &'static str) -> Self {
        Self::scalar(FieldType::Float, description)
    }

    pub fn text(description: &'static str) -> Self {
        Self::scalar(FieldType::Text, description)
    }

    pub fn raw(description: &'static str) -> Self {
        Self::scalar(FieldType::Raw, description)
    }

    fn scalar(field_type: FieldType, description: &'static str) -> Self {
        Self::Scalar(Scalar {
            field_type,
            description,
            required: true,
        })
    }

    pub fn list(description: &'static str, element: Shape) -> Self {
        Self::List(ListShape {
            description,
            required: true,
            element: Box::new(element),
        })
    }

    pub fn record(fields: Vec<(&'static str, Shape)>) -> Self {
        Self::Record(RecordShape { fields })
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListShape> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordShape> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), SchemaError> {
        match self {
            Self::Scalar(scalar) => scalar.validate_at(value, path),
            Self::List(list) => list.validate_at(value, path),
            Self::Record(record) => record.validate_at(value, path),
        }
    }
}

impl Scalar {
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn required(&self) -> bool {
        self.required
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), SchemaError> {
        let matches = match self.field_type {
            FieldType::Int => value.as_i64().is_some(),
            FieldType::Float => value.as_f64().is_some(),
            FieldType::Text | FieldType::Raw => value.is_string(),
        };
        if matches {
            Ok(())
        } else {
            Err(SchemaError::TypeMismatch {
                path: path.to_string(),
                expected: self.field_type.name(),
            })
        }
    }
}

impl ListShape {
    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn element(&self) -> &Shape {
        &self.element
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), SchemaError> {
        let items = value.as_array().ok_or_else(|| SchemaError::TypeMismatch {
            path: path.to_string(),
            expected: "list",
        })?;
        for (i, item) in items.iter().enumerate() {
            self.element.validate_at(item, &format!("{path}[{i}]"))?;
        }
        Ok(())
    }
}

impl RecordShape {
    pub fn new(fields: Vec<(&'static str, Shape)>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Shape> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, shape)| shape)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn validate(&self, value: &Value) -> Result<(), SchemaError> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), SchemaError> {
        let object = value.as_object().ok_or_else(|| SchemaError::TypeMismatch {
            path: path.to_string(),
            expected: "record",
        })?;

        for (name, shape) in &self.fields {
            match object.get(*name) {
                Some(field_value) => shape.validate_at(field_value, &format!("{path}.{name}"))?,
                None => {
                    return Err(SchemaError::MissingField {
                        path: format!("{path}.{name}"),
                    });
                }
            }
        }

        for key in object.keys() {
            if self.field(key).is_none() {
                return Err(SchemaError::UnexpectedField {
                    path: format!("{path}.{key}"),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("type mismatch at {path}: expected {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
    },
    #[error("missing required field at {path}")]
    MissingField { path: String },
    #[error("unexpected field at {path}")]
    UnexpectedField { path: String },
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn sample() -> Shape {
        Shape::list(
            "List of things.",
            Shape::record(vec![
                ("id", Shape::int("Thing ID")),
                ("name", Shape::text("Thing name")),
                ("weight", Shape::float("Thing weight")),
            ]),
        )
    }

    #[test]
    fn validate_accepts_conforming_value() {
        let value = json!([{"id": 1, "name": "a", "weight": 0.5}]);
        assert!(sample().validate(&value).is_ok());
    }

    #[test]
    fn validate_accepts_empty_list() {
        assert!(sample().validate(&json!([])).is_ok());
    }

    #[test]
    fn validate_rejects_missing_field() {
        let value = json!([{"id": 1, "weight": 0.5}]);
        assert_eq!(
            sample().validate(&value),
            Err(SchemaError::MissingField {
                path: "$[0].name".to_string()
            })
        );
    }

    #[test]
    fn validate_rejects_unexpected_field() {
        let value = json!([{"id": 1, "name": "a", "weight": 0.5, "extra": 2}]);
        assert_eq!(
            sample().validate(&value),
            Err(SchemaError::UnexpectedField {
                path: "$[0].extra".to_string()
            })
        );
    }

    #[test]
    fn validate_rejects_type_mismatch() {
        let value = json!([{"id": 1.5, "name": "a", "weight": 0.5}]);
        assert_eq!(
            sample().validate(&value),
            Err(SchemaError::TypeMismatch {
                path: "$[0].id".to_string(),
                expected: "int"
            })
        );
    }

    #[test]
    fn integer_marks_still_satisfy_float() {
        let value = json!([{"id": 1, "name": "a", "weight": 2}]);
        assert!(sample().validate(&value).is_ok());
    }
}
