//! Admission rules for todo text fields.
//!
//! # Responsibility
//! - Check candidate titles/descriptions before they reach the store.
//! - Normalize accepted input (trimmed title, defaulted description).
//!
//! # Invariants
//! - Pure and deterministic: same input, same verdict, no side effects.
//! - Lengths are counted in Unicode scalar values, not bytes.

use crate::model::todo::TodoPatch;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum title length after trimming.
pub const TITLE_MAX_CHARS: usize = 200;
/// Maximum description length.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Caller-correctable input error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
    /// Trimmed title exceeds [`TITLE_MAX_CHARS`].
    TitleTooLong { len: usize },
    /// Description exceeds [`DESCRIPTION_MAX_CHARS`].
    DescriptionTooLong { len: usize },
    /// A request field has the wrong shape.
    InvalidField { field: String, reason: String },
}

impl ValidationError {
    pub(crate) fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title is required"),
            Self::TitleTooLong { .. } => {
                write!(f, "Title must be less than {TITLE_MAX_CHARS} characters")
            }
            Self::DescriptionTooLong { .. } => {
                write!(
                    f,
                    "Description must be less than {DESCRIPTION_MAX_CHARS} characters"
                )
            }
            Self::InvalidField { field, reason } => write!(f, "Invalid field `{field}`: {reason}"),
        }
    }
}

impl Error for ValidationError {}

/// Accepted create input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTodo {
    /// Trimmed, non-empty title.
    pub title: String,
    /// Description as given, or empty when absent.
    pub description: String,
}

/// Validates create input.
///
/// # Errors
/// - `EmptyTitle` when the trimmed title is empty.
/// - `TitleTooLong` when the trimmed title exceeds 200 chars.
/// - `DescriptionTooLong` when the description exceeds 500 chars.
pub fn validate_create(
    title: &str,
    description: Option<&str>,
) -> Result<ValidatedTodo, ValidationError> {
    let title = validate_title(title)?;
    let description = description.unwrap_or_default();
    validate_description(description)?;

    Ok(ValidatedTodo {
        title,
        description: description.to_string(),
    })
}

/// Validates the present fields of an update patch.
///
/// The returned patch carries the trimmed title; absent fields pass through.
///
/// # Errors
/// Same per-field rules as [`validate_create`].
pub fn validate_update(patch: TodoPatch) -> Result<TodoPatch, ValidationError> {
    let title = match patch.title {
        Some(raw) => Some(validate_title(raw.as_str())?),
        None => None,
    };
    if let Some(description) = patch.description.as_deref() {
        validate_description(description)?;
    }

    Ok(TodoPatch { title, ..patch })
}

fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let len = trimmed.chars().count();
    if len > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong { len });
    }
    Ok(trimmed.to_string())
}

fn validate_description(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong { len });
    }
    Ok(())
}
