//! Command request bodies and raw JSON decoding.
//!
//! Decoding only checks shape (JSON types of known keys). Content rules
//! (presence, lengths) stay in `crate::validation` so typed and raw callers
//! share one verdict.

use crate::model::todo::TodoPatch;
use crate::validation::ValidationError;
use serde_json::{Map, Value};

/// Body of a create command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: Option<String>,
}

impl CreateTodoRequest {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    /// Decodes a raw JSON body.
    ///
    /// A missing or `null` title decodes to an empty title, which the
    /// validator then rejects as `EmptyTitle`.
    ///
    /// # Errors
    /// `InvalidField` when the body is not an object or a known key has the
    /// wrong JSON type.
    pub fn from_json(raw: &str) -> Result<Self, ValidationError> {
        let body = parse_object(raw)?;
        Ok(Self {
            title: optional_string(&body, "title")?.unwrap_or_default(),
            description: optional_string(&body, "description")?,
        })
    }
}

/// Body of an update command. Unknown keys (including `id` and timestamps)
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// Decodes a raw JSON body.
    ///
    /// # Errors
    /// `InvalidField` when the body is not an object or a known key has the
    /// wrong JSON type.
    pub fn from_json(raw: &str) -> Result<Self, ValidationError> {
        let body = parse_object(raw)?;
        Ok(Self {
            title: optional_string(&body, "title")?,
            description: optional_string(&body, "description")?,
            completed: optional_bool(&body, "completed")?,
        })
    }
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(value: UpdateTodoRequest) -> Self {
        Self {
            title: value.title,
            description: value.description,
            completed: value.completed,
        }
    }
}

fn parse_object(raw: &str) -> Result<Map<String, Value>, ValidationError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(body)) => Ok(body),
        Ok(_) => Err(ValidationError::invalid_field(
            "body",
            "expected a JSON object",
        )),
        Err(err) => Err(ValidationError::invalid_field("body", err.to_string())),
    }
}

fn optional_string(
    body: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, ValidationError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ValidationError::invalid_field(key, "expected a string")),
    }
}

fn optional_bool(
    body: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<bool>, ValidationError> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(ValidationError::invalid_field(key, "expected a boolean")),
    }
}
