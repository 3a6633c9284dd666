//! Authoritative in-memory todo collection.
//!
//! # Responsibility
//! - Own the ordered todo collection and every mutation applied to it.
//! - Issue identities and timestamps.
//!
//! # Invariants
//! - Collection order is insertion order, newest first.
//! - Ids come from a monotonically increasing counter and are never reused.
//! - Stamps handed out by one store are strictly increasing, so `created_at`
//!   order equals insertion order and every mutation advances `updated_at`.
//! - Missing ids are reported as `StoreError::NotFound` / `false`, never a panic.
//!
//! Input is assumed to be validated already; see `crate::validation`.

use crate::model::todo::{Todo, TodoId, TodoPatch};
use crate::store::clock::{Clock, SystemClock};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested id.
    NotFound(TodoId),
    /// The id source produced an id that is already present.
    DuplicateId(TodoId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate todo id issued: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Single-owner todo collection.
///
/// All mutations take `&mut self`; sharing across threads goes through
/// `crate::repo::todo_repo::InMemoryTodoRepository`.
pub struct TodoStore {
    todos: Vec<Todo>,
    next_seq: u64,
    last_stamp: i64,
    clock: Box<dyn Clock>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Creates an empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty store stamped by `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            todos: Vec::new(),
            next_seq: 1,
            last_stamp: i64::MIN,
            clock: Box::new(clock),
        }
    }

    /// Current collection, newest first.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Inserts a new incomplete todo at the front of the collection.
    ///
    /// # Errors
    /// `DuplicateId` if the issued id is already present. Unreachable while ids
    /// only come from this store's counter.
    pub fn add(&mut self, title: String, description: String) -> StoreResult<Todo> {
        let id = TodoId::from_sequence(self.next_seq);
        if self.position(&id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }
        self.next_seq += 1;

        let stamp = self.next_stamp();
        let todo = Todo {
            id,
            title,
            description,
            completed: false,
            created_at: stamp,
            updated_at: stamp,
        };
        self.todos.insert(0, todo.clone());
        Ok(todo)
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    /// Merges `patch` into the record and refreshes `updated_at`.
    ///
    /// # Errors
    /// `NotFound` when `id` is absent.
    pub fn update(&mut self, id: &TodoId, patch: TodoPatch) -> StoreResult<Todo> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let stamp = self.next_stamp();
        let todo = &mut self.todos[index];
        patch.apply_to(todo);
        todo.updated_at = stamp;
        Ok(todo.clone())
    }

    /// Removes the record; returns whether one was removed.
    pub fn delete(&mut self, id: &TodoId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flips `completed` and refreshes `updated_at`.
    ///
    /// # Errors
    /// `NotFound` when `id` is absent.
    pub fn toggle(&mut self, id: &TodoId) -> StoreResult<Todo> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let stamp = self.next_stamp();
        let todo = &mut self.todos[index];
        todo.completed = !todo.completed;
        todo.updated_at = stamp;
        Ok(todo.clone())
    }

    /// Removes every completed record, keeping the relative order of the rest.
    ///
    /// Returns the number removed.
    pub fn delete_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.completed);
        before - self.todos.len()
    }

    /// Marks every record completed and bumps every `updated_at`, including
    /// records that were already completed.
    ///
    /// Returns the full collection after the operation.
    pub fn mark_all_complete(&mut self) -> Vec<Todo> {
        if !self.todos.is_empty() {
            let stamp = self.next_stamp();
            for todo in &mut self.todos {
                todo.completed = true;
                todo.updated_at = stamp;
            }
        }
        self.todos.clone()
    }

    fn position(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| &todo.id == id)
    }

    fn next_stamp(&mut self) -> i64 {
        let stamp = self
            .clock
            .now_ms()
            .max(self.last_stamp.saturating_add(1));
        self.last_stamp = stamp;
        stamp
    }
}
