//! Core domain logic for the task list.
//! This crate is the single source of truth for todo invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod store;
pub mod validation;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId, TodoPatch};
pub use query::filters::{FilterPatch, SortMode, TodoFilters};
pub use query::view::{completed, find_by_id, incomplete, stats, view, TodoStats};
pub use repo::todo_repo::{InMemoryTodoRepository, TodoRepository};
pub use service::envelope::{Envelope, Outcome};
pub use service::request::{CreateTodoRequest, UpdateTodoRequest};
pub use service::todo_gateway::TodoGateway;
pub use store::clock::{Clock, ManualClock, SystemClock};
pub use store::todo_store::{StoreError, StoreResult, TodoStore};
pub use validation::{
    validate_create, validate_update, ValidatedTodo, ValidationError, DESCRIPTION_MAX_CHARS,
    TITLE_MAX_CHARS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
