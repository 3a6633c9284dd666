//! Todo repository contract and lock-guarded in-memory implementation.
//!
//! # Responsibility
//! - Give the gateway a `&self` CRUD contract independent of how the
//!   collection is owned.
//! - Serialize mutations from concurrent callers.
//!
//! # Invariants
//! - Every mutation runs under one exclusive write lock; mutations are totally
//!   ordered.
//! - Reads share a read lock and never observe a collection mid-mutation.
//! - No lock is held across I/O; id generation and stamping are local.

use crate::model::todo::{Todo, TodoId, TodoPatch};
use crate::store::clock::Clock;
use crate::store::todo_store::{StoreResult, TodoStore};
use parking_lot::RwLock;
use std::sync::Arc;

/// Repository interface for todo operations.
pub trait TodoRepository {
    fn add(&self, title: String, description: String) -> StoreResult<Todo>;
    /// Snapshot of the whole collection, newest first.
    fn list(&self) -> Vec<Todo>;
    fn get(&self, id: &TodoId) -> Option<Todo>;
    fn update(&self, id: &TodoId, patch: TodoPatch) -> StoreResult<Todo>;
    fn delete(&self, id: &TodoId) -> bool;
    fn toggle(&self, id: &TodoId) -> StoreResult<Todo>;
    fn delete_completed(&self) -> usize;
    fn mark_all_complete(&self) -> Vec<Todo>;
}

/// Process-scoped repository over a shared `TodoStore`.
///
/// Cloning yields another handle to the same collection.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<TodoStore>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty repository stamped by the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository stamped by `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::from_store(TodoStore::with_clock(clock))
    }

    pub fn from_store(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Runs `f` against the collection under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&[Todo]) -> T) -> T {
        let guard = self.store.read();
        f(guard.todos())
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn add(&self, title: String, description: String) -> StoreResult<Todo> {
        self.store.write().add(title, description)
    }

    fn list(&self) -> Vec<Todo> {
        self.store.read().todos().to_vec()
    }

    fn get(&self, id: &TodoId) -> Option<Todo> {
        self.store.read().get(id).cloned()
    }

    fn update(&self, id: &TodoId, patch: TodoPatch) -> StoreResult<Todo> {
        self.store.write().update(id, patch)
    }

    fn delete(&self, id: &TodoId) -> bool {
        self.store.write().delete(id)
    }

    fn toggle(&self, id: &TodoId) -> StoreResult<Todo> {
        self.store.write().toggle(id)
    }

    fn delete_completed(&self) -> usize {
        self.store.write().delete_completed()
    }

    fn mark_all_complete(&self) -> Vec<Todo> {
        self.store.write().mark_all_complete()
    }
}
