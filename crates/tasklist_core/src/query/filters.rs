//! Filter criteria consumed by the view derivation.
//!
//! Criteria carry no identity: callers replace them wholesale or merge a
//! [`FilterPatch`] into them.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Ordering applied by [`crate::query::view::view`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Descending `created_at`.
    #[default]
    Newest,
    /// Ascending `created_at`.
    Oldest,
    /// Ascending title, case-insensitive first.
    Alphabetical,
    /// Completed records first, collection order otherwise.
    #[serde(rename = "completed")]
    CompletedFirst,
    /// Any token this build does not know. Leaves order untouched.
    #[serde(other)]
    Unrecognized,
}

impl SortMode {
    /// Parses a wire token. Unknown tokens map to `Unrecognized`, not an error.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "newest" => Self::Newest,
            "oldest" => Self::Oldest,
            "alphabetical" => Self::Alphabetical,
            "completed" => Self::CompletedFirst,
            _ => Self::Unrecognized,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Alphabetical => "alphabetical",
            Self::CompletedFirst => "completed",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search, visibility and ordering criteria for one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoFilters {
    /// Case-insensitive substring matched against title or description.
    pub search: String,
    pub sort_by: SortMode,
    /// When `false`, completed records are dropped from the view.
    pub show_completed: bool,
}

impl Default for TodoFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: SortMode::Newest,
            show_completed: true,
        }
    }
}

impl TodoFilters {
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort_by: SortMode) -> Self {
        self.sort_by = sort_by;
        self
    }

    #[must_use]
    pub fn with_show_completed(mut self, show_completed: bool) -> Self {
        self.show_completed = show_completed;
        self
    }

    /// Merges the present fields of `patch`.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(show_completed) = patch.show_completed {
            self.show_completed = show_completed;
        }
    }

    /// Restores the default criteria.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Partial filter update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    pub search: Option<String>,
    pub sort_by: Option<SortMode>,
    pub show_completed: Option<bool>,
}
