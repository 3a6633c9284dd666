//! Repository layer over the todo store.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract used by the gateway.
//! - Isolate ownership/locking details from command orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic not-found signals rather than panicking.

pub mod todo_repo;
