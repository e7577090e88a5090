//! Generic JSON kind and key-set checker
//!
//! The building blocks every schema validator composes: classify a JSON
//! node by kind, compare a present key-set to a declared one, and walk an
//! [`ObjectSchema`] field table. Errors carry the JSON path of the
//! offending node so a failure deep inside a list element still names its
//! exact location.
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

use crate::error::{ConformanceError, ConformanceResult};
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

static NULL: Value = Value::Null;

/// Classification of a JSON node by kind.
///
/// Schemas declare expectations as `JsonKind` values rather than exemplar
/// zero-values; a node whose kind differs fails with
/// [`ConformanceError::TypeMismatch`]. Numbers that fit an integer
/// classify as `Integer`, everything else numeric as `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a decoded JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Kind name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// JSON-path cursor threaded through validation.
///
/// Derived contexts extend the path (`$.payload.reelList[0].url`) so every
/// error names the exact node it was raised at.
#[derive(Debug, Clone)]
pub struct CheckContext {
    path: String,
}

impl CheckContext {
    /// Context rooted at the whole reply.
    pub fn root() -> Self {
        Self {
            path: "$".to_string(),
        }
    }

    /// Context rooted at an arbitrary path.
    pub fn new<P: Into<String>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Child context for a named member.
    pub fn child<S: AsRef<str>>(&self, segment: S) -> Self {
        Self {
            path: format!("{}.{}", self.path, segment.as_ref()),
        }
    }

    /// Child context for a list index.
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// One declared field of an object schema: its key and expected kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: JsonKind,
}

/// A closed object shape: a labelled, exact set of typed fields.
///
/// "Closed" means the key-set must match exactly; objects with extra keys
/// are rejected, not ignored.
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    /// Key-set label used in error messages
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ObjectSchema {
    /// The declared key names, in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }
}

/// Borrow a member value, or `Null` if absent.
///
/// Only meaningful after `check_keys` has accepted the object, at which
/// point every declared member is known to be present.
pub fn member<'a>(object: &'a Map<String, Value>, key: &str) -> &'a Value {
    object.get(key).unwrap_or(&NULL)
}

/// Check that a value's kind matches the expected kind.
pub fn check_kind(ctx: &CheckContext, value: &Value, expected: JsonKind) -> ConformanceResult<()> {
    debug!(path = %ctx.path(), expected = %expected, "checking value kind");
    let actual = JsonKind::of(value);
    if actual != expected {
        return Err(ConformanceError::TypeMismatch {
            path: ctx.path().to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Check a value is an object and borrow its map.
pub fn expect_object<'a>(
    ctx: &CheckContext,
    value: &'a Value,
) -> ConformanceResult<&'a Map<String, Value>> {
    check_kind(ctx, value, JsonKind::Object)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConformanceError::TypeMismatch {
            path: ctx.path().to_string(),
            expected: JsonKind::Object,
            actual: JsonKind::of(value),
        }),
    }
}

/// Check an object's key-set exactly matches the declared set.
///
/// Two passes: every present key must be declared, then every declared key
/// must be present. Key order is irrelevant and the first violation found
/// aborts the check.
pub fn check_keys(
    key_set: &str,
    object: &Map<String, Value>,
    expected: &[&str],
) -> ConformanceResult<()> {
    debug!(key_set, ?expected, "checking key set");

    // First make sure that any key present is declared
    for key in object.keys() {
        if !expected.contains(&key.as_str()) {
            return Err(ConformanceError::UnexpectedKey {
                key_set: key_set.to_string(),
                key: key.clone(),
            });
        }
    }

    // Now make sure that all the declared keys are present
    for key in expected {
        if !object.contains_key(*key) {
            return Err(ConformanceError::MissingKey {
                key_set: key_set.to_string(),
                key: (*key).to_string(),
            });
        }
    }

    Ok(())
}

/// Validate a value against a closed object schema: object kind, exact
/// key-set, then the kind of every declared field.
pub fn check_object(
    ctx: &CheckContext,
    value: &Value,
    schema: &ObjectSchema,
) -> ConformanceResult<()> {
    let object = expect_object(ctx, value)?;
    let declared = schema.keys();
    check_keys(schema.label, object, &declared)?;
    for field in schema.fields {
        if let Some(value) = object.get(field.name) {
            check_kind(&ctx.child(field.name), value, field.kind)?;
        }
    }
    Ok(())
}

/// Check a declared count field against the actual length of its list.
pub fn check_count(
    count_field: &str,
    list_field: &str,
    declared: i64,
    actual: usize,
) -> ConformanceResult<()> {
    debug!(count_field, list_field, declared, actual, "checking declared count against list length");
    if declared != actual as i64 {
        return Err(ConformanceError::CountMismatch {
            count_field: count_field.to_string(),
            list_field: list_field.to_string(),
            declared,
            actual: actual as i64,
        });
    }
    Ok(())
}
