//! In-memory todo storage.
//!
//! # Responsibility
//! - Hold the authoritative todo collection for the process lifetime.
//! - Issue identities and timestamps.
//!
//! # Invariants
//! - Nothing is persisted; a new store always starts empty.
//! - No store operation blocks on I/O.

pub mod clock;
pub mod todo_store;
