//! Read-side derivations over the todo collection.
//!
//! # Responsibility
//! - Turn a collection snapshot plus filter criteria into an ordered view.
//! - Aggregate completion statistics.
//!
//! # Invariants
//! - Query code never mutates the store and holds no state between calls.

pub mod filters;
pub mod view;
