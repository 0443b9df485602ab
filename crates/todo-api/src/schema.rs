//! # Payload Schema
//!
//! Client payloads arrive as untyped JSON. Rather than deserializing straight
//! into a struct (which reports only the first problem it hits), the service
//! evaluates each payload against an explicit schema description — a mapping
//! from field name to `{ kind, required, default }` — and collects **every**
//! violation, so the transport layer can render field-level detail in one
//! response.
//!
//! Rules enforced for a Todo payload:
//! - `text`: required, must be a string. Presence and type only; an empty
//!   string is accepted.
//! - `is_done`: optional, must be a boolean when present; defaults to `false`.
//! - Unknown fields are ignored. In particular a client-supplied `id` is
//!   silently dropped: identifiers are assigned by the store alone.

use crate::model::TodoFields;
use serde_json::{Map, Value};
use std::fmt::Display;

/// The JSON type a field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string.
    Text,
    /// A JSON boolean.
    Flag,
}

impl FieldKind {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Flag => value.is_boolean(),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Flag => "boolean",
        }
    }
}

/// Description of a single schema field.
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Value substituted when an optional field is absent.
    pub default: Option<Value>,
}

/// A declarative payload schema: the full set of known fields.
#[derive(Debug)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

/// A single schema violation, carrying the offending field name and a
/// human-readable message the transport can surface verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Renders a violation list for error messages: `text: field required; ...`
pub fn violation_summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Schema {
    /// Evaluates `payload` against the schema.
    ///
    /// Returns the normalized field map (defaults applied, unknown fields
    /// stripped) or the complete list of violations. Validation never stops
    /// at the first problem.
    pub fn validate(&self, payload: &Value) -> Result<Map<String, Value>, Vec<Violation>> {
        let Some(object) = payload.as_object() else {
            return Err(vec![Violation::new("payload", "expected a JSON object")]);
        };

        let mut normalized = Map::new();
        let mut violations = Vec::new();

        for spec in self.fields {
            match object.get(spec.name) {
                Some(value) if spec.kind.matches(value) => {
                    normalized.insert(spec.name.to_string(), value.clone());
                }
                Some(_) => {
                    violations.push(Violation::new(
                        spec.name,
                        format!("expected {}", spec.kind.expected()),
                    ));
                }
                None if spec.required => {
                    violations.push(Violation::new(spec.name, "field required"));
                }
                None => {
                    if let Some(default) = &spec.default {
                        normalized.insert(spec.name.to_string(), default.clone());
                    }
                }
            }
        }

        if violations.is_empty() {
            Ok(normalized)
        } else {
            Err(violations)
        }
    }
}

/// Schema for a Todo payload, shared by create and update: both take the
/// same full payload shape (no partial-patch semantics).
pub const TODO_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec {
            name: "text",
            kind: FieldKind::Text,
            required: true,
            default: None,
        },
        FieldSpec {
            name: "is_done",
            kind: FieldKind::Flag,
            required: false,
            default: Some(Value::Bool(false)),
        },
    ],
};

/// Validates a raw payload into [`TodoFields`].
pub fn todo_fields(payload: &Value) -> Result<TodoFields, Vec<Violation>> {
    let normalized = TODO_SCHEMA.validate(payload)?;
    // Types are guaranteed by the schema pass above.
    Ok(TodoFields {
        text: normalized
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        is_done: normalized
            .get("is_done")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}
