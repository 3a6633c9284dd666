//! Command gateway services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into command-level APIs.
//! - Keep transport/presentation layers decoupled from storage details.

pub mod envelope;
pub mod request;
pub mod todo_gateway;
