//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the data structures shared by store, query and gateway layers.
//!
//! # Invariants
//! - Every record is identified by a store-issued `TodoId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod todo;
