//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical task record held by the store.
//! - Define the partial-field patch applied by update commands.
//!
//! # Invariants
//! - `id` is assigned once by the store and never reused or changed.
//! - `updated_at >= created_at` for every record the store hands out.
//! - `title` is never stored empty or untrimmed.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque, store-assigned identity of a todo.
///
/// Rendered and compared as a plain string so transports can pass ids through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps a raw id value received from a caller.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds the id for one counter value issued by the store.
    pub(crate) fn from_sequence(value: u64) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Stable store-assigned identity.
    pub id: TodoId,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Free text; empty string when the caller gave none.
    pub description: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds. Refreshed by every mutation of this record.
    pub updated_at: i64,
}

impl Todo {
    /// Returns whether this record's text matches an already-lowercased needle.
    ///
    /// An empty needle matches every record.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

/// Partial field set for update commands.
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that only changes the title.
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    /// Patch that only changes the completion flag.
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }

    /// Merges present fields into `todo`.
    ///
    /// Timestamps and identity are the store's concern and are not touched here.
    pub(crate) fn apply_to(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}
