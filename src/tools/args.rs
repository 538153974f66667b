//! # Tool Arguments
//!
//! Declarative argument fields. One field table per tool drives both the
//! published JSON Schema and validation, which fills in defaults and reports
//! every failing field at once.

use serde_json::{json, Map, Value};
use std::fmt;

/// Accepted shape of a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole number within inclusive bounds
    Integer { min: i64, max: i64 },
    Boolean,
    /// One of the listed names, matched exactly
    Enum(&'static [&'static str]),
}

/// Whether an argument may be omitted and what it becomes if it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Required,
    /// May be omitted; stays absent
    Optional,
    Int(i64),
    Bool(bool),
}

/// One argument of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
}

impl FieldSpec {
    pub const fn integer(name: &'static str, description: &'static str, min: i64, max: i64) -> Self {
        Self {
            name,
            description,
            kind: FieldKind::Integer { min, max },
            default: FieldDefault::Required,
        }
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: FieldKind::Boolean,
            default: FieldDefault::Required,
        }
    }

    pub const fn one_of(name: &'static str, description: &'static str, names: &'static [&'static str]) -> Self {
        Self {
            name,
            description,
            kind: FieldKind::Enum(names),
            default: FieldDefault::Required,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.default = FieldDefault::Optional;
        self
    }

    pub const fn default_int(mut self, value: i64) -> Self {
        self.default = FieldDefault::Int(value);
        self
    }

    pub const fn default_bool(mut self, value: bool) -> Self {
        self.default = FieldDefault::Bool(value);
        self
    }

    fn default_value(&self) -> Option<Value> {
        match self.default {
            FieldDefault::Int(v) => Some(json!(v)),
            FieldDefault::Bool(v) => Some(json!(v)),
            FieldDefault::Required | FieldDefault::Optional => None,
        }
    }

    /// Checks a supplied value, returning it in canonical form or the
    /// violated constraint.
    ///
    /// Integers written with a zero fraction (`10.0`) are accepted and stored
    /// as plain integers.
    fn check(&self, value: &Value) -> Result<Value, String> {
        match self.kind {
            FieldKind::Integer { min, max } => match value.as_f64() {
                Some(f) if f.fract() == 0.0 => match whole_number(value) {
                    Some(v) if v >= min && v <= max => Ok(json!(v)),
                    _ => Err(format!("must be between {} and {} (got {})", min, max, value)),
                },
                _ => Err(format!("must be an integer (got {})", value)),
            },
            FieldKind::Boolean => match value {
                Value::Bool(_) => Ok(value.clone()),
                other => Err(format!("must be a boolean (got {})", other)),
            },
            FieldKind::Enum(names) => match value.as_str() {
                Some(s) if names.contains(&s) => Ok(value.clone()),
                _ => Err(format!("must be one of {} (got {})", names.join(", "), value)),
            },
        }
    }

    fn schema(&self) -> Value {
        let mut property = match self.kind {
            FieldKind::Integer { min, max } => json!({
                "type": "integer",
                "minimum": min,
                "maximum": max,
            }),
            FieldKind::Boolean => json!({ "type": "boolean" }),
            FieldKind::Enum(names) => json!({ "type": "string", "enum": names }),
        };
        if let Value::Object(map) = &mut property {
            map.insert("description".to_string(), json!(self.description));
            if let Some(default) = self.default_value() {
                map.insert("default".to_string(), default);
            }
        }
        property
    }
}

/// Largest magnitude at which every whole `f64` is exact.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Whole-number value of a JSON number, `None` when it does not fit an `i64`.
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT)
            .map(|f| f as i64)
    })
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub constraint: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

/// Every field that failed validation for one call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", describe(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builds the JSON Schema object for a tool's arguments.
pub fn input_schema(fields: &[FieldSpec]) -> Value {
    let properties: Map<String, Value> = fields
        .iter()
        .map(|f| (f.name.to_string(), f.schema()))
        .collect();
    let required: Vec<&str> = fields
        .iter()
        .filter(|f| f.default == FieldDefault::Required)
        .map(|f| f.name)
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Validates raw arguments against the field table.
///
/// Missing or null arguments are treated as an empty object. Unknown keys are
/// dropped. On success the returned map holds every supplied field plus the
/// defaults of omitted ones.
pub fn validate_arguments(fields: &[FieldSpec], arguments: &Value) -> Result<Map<String, Value>, ValidationErrors> {
    let empty = Map::new();
    let supplied = match arguments {
        Value::Object(map) => map,
        Value::Null => &empty,
        other => {
            return Err(ValidationErrors {
                errors: vec![FieldError::new(
                    "arguments",
                    format!("must be an object (got {})", other),
                )],
            })
        }
    };

    let mut validated = Map::new();
    let mut errors = Vec::new();

    for field in fields {
        match supplied.get(field.name).filter(|v| !v.is_null()) {
            Some(value) => match field.check(value) {
                Ok(value) => {
                    validated.insert(field.name.to_string(), value);
                }
                Err(constraint) => errors.push(FieldError::new(field.name, constraint)),
            },
            None => match field.default {
                FieldDefault::Required => errors.push(FieldError::new(field.name, "is required")),
                FieldDefault::Optional => {}
                FieldDefault::Int(_) | FieldDefault::Bool(_) => {
                    if let Some(default) = field.default_value() {
                        validated.insert(field.name.to_string(), default);
                    }
                }
            },
        }
    }

    if errors.is_empty() {
        Ok(validated)
    } else {
        Err(ValidationErrors { errors })
    }
}
