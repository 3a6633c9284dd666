//! Command gateway over the todo repository.
//!
//! # Responsibility
//! - Accept external commands, validate them and apply them to the repository.
//! - Answer every command with a well-formed [`Envelope`].
//!
//! # Invariants
//! - Validation failures short-circuit before any repository call.
//! - Not-found and validation outcomes are ordinary envelopes, never panics.
//! - User text (titles, descriptions) is never written to logs.

use crate::model::todo::{Todo, TodoId, TodoPatch};
use crate::query::filters::TodoFilters;
use crate::query::view::{self, TodoStats};
use crate::repo::todo_repo::TodoRepository;
use crate::service::envelope::Envelope;
use crate::service::request::{CreateTodoRequest, UpdateTodoRequest};
use crate::store::todo_store::StoreError;
use crate::validation::{validate_create, validate_update, ValidationError};
use log::{debug, error, info};

const MSG_NOT_FOUND: &str = "Todo not found";

/// Use-case entry point wrapping a repository implementation.
pub struct TodoGateway<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoGateway<R> {
    /// Creates a gateway using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and stores a new todo.
    pub fn create(&self, title: &str, description: Option<&str>) -> Envelope<Todo> {
        let accepted = match validate_create(title, description) {
            Ok(accepted) => accepted,
            Err(err) => return rejected("todo_create", err),
        };

        match self.repo.add(accepted.title, accepted.description) {
            Ok(todo) => {
                info!(
                    "event=todo_create module=gateway status=ok id={}",
                    todo.id
                );
                Envelope::created(todo, "Todo created successfully")
            }
            Err(err) => fault("todo_create", "Failed to create todo", &err),
        }
    }

    /// Same as [`Self::create`] for an already decoded request body.
    pub fn create_request(&self, request: &CreateTodoRequest) -> Envelope<Todo> {
        self.create(request.title.as_str(), request.description.as_deref())
    }

    /// Decodes a raw JSON body and creates from it.
    pub fn create_json(&self, body: &str) -> Envelope<Todo> {
        match CreateTodoRequest::from_json(body) {
            Ok(request) => self.create_request(&request),
            Err(err) => rejected("todo_create", err),
        }
    }

    /// Returns the whole collection, newest first.
    pub fn list(&self) -> Envelope<Vec<Todo>> {
        let todos = self.repo.list();
        debug!(
            "event=todo_list module=gateway status=ok count={}",
            todos.len()
        );
        Envelope::ok(todos, "Todos fetched successfully")
    }

    pub fn get_by_id(&self, id: &str) -> Envelope<Todo> {
        let id = TodoId::from(id);
        match self.repo.get(&id) {
            Some(todo) => {
                debug!("event=todo_get module=gateway status=ok id={id}");
                Envelope::ok(todo, "Todo fetched successfully")
            }
            None => missing("todo_get", &id),
        }
    }

    /// Validates the present fields of `patch` and merges them into the record.
    pub fn update(&self, id: &str, patch: TodoPatch) -> Envelope<Todo> {
        let patch = match validate_update(patch) {
            Ok(patch) => patch,
            Err(err) => return rejected("todo_update", err),
        };

        let id = TodoId::from(id);
        match self.repo.update(&id, patch) {
            Ok(todo) => {
                info!("event=todo_update module=gateway status=ok id={id}");
                Envelope::ok(todo, "Todo updated successfully")
            }
            Err(StoreError::NotFound(_)) => missing("todo_update", &id),
            Err(err) => fault("todo_update", "Failed to update todo", &err),
        }
    }

    /// Decodes a raw JSON body and updates from it.
    pub fn update_json(&self, id: &str, body: &str) -> Envelope<Todo> {
        match UpdateTodoRequest::from_json(body) {
            Ok(request) => self.update(id, request.into()),
            Err(err) => rejected("todo_update", err),
        }
    }

    pub fn delete(&self, id: &str) -> Envelope<()> {
        let id = TodoId::from(id);
        if self.repo.delete(&id) {
            info!("event=todo_delete module=gateway status=ok id={id}");
            Envelope::empty("Todo deleted successfully")
        } else {
            missing("todo_delete", &id)
        }
    }

    pub fn toggle(&self, id: &str) -> Envelope<Todo> {
        let id = TodoId::from(id);
        match self.repo.toggle(&id) {
            Ok(todo) => {
                info!(
                    "event=todo_toggle module=gateway status=ok id={id} completed={}",
                    todo.completed
                );
                Envelope::ok(todo, "Todo toggled successfully")
            }
            Err(StoreError::NotFound(_)) => missing("todo_toggle", &id),
            Err(err) => fault("todo_toggle", "Failed to toggle todo", &err),
        }
    }

    /// Removes every completed todo; the message reports how many.
    pub fn delete_completed(&self) -> Envelope<()> {
        let removed = self.repo.delete_completed();
        info!("event=todo_delete_completed module=gateway status=ok removed={removed}");
        Envelope::empty(format!("{removed} completed todos deleted successfully"))
    }

    pub fn mark_all_complete(&self) -> Envelope<Vec<Todo>> {
        let todos = self.repo.mark_all_complete();
        info!(
            "event=todo_mark_all_complete module=gateway status=ok count={}",
            todos.len()
        );
        Envelope::ok(todos, "All todos marked as complete")
    }

    /// Filtered, sorted view of a fresh collection snapshot.
    pub fn view(&self, filters: &TodoFilters) -> Envelope<Vec<Todo>> {
        let todos = self.repo.list();
        let visible = view::view(&todos, filters);
        debug!(
            "event=todo_view module=gateway status=ok sort={} show_completed={} count={}",
            filters.sort_by,
            filters.show_completed,
            visible.len()
        );
        Envelope::ok(visible, "Todos fetched successfully")
    }

    /// Aggregate statistics of a fresh collection snapshot.
    pub fn stats(&self) -> Envelope<TodoStats> {
        let stats = view::stats(&self.repo.list());
        Envelope::ok(stats, "Todo stats computed successfully")
    }
}

fn rejected<T>(event: &str, err: ValidationError) -> Envelope<T> {
    debug!("event={event} module=gateway status=rejected reason={err:?}");
    Envelope::bad_request(err.to_string())
}

fn missing<T>(event: &str, id: &TodoId) -> Envelope<T> {
    debug!("event={event} module=gateway status=not_found id={id}");
    Envelope::not_found(MSG_NOT_FOUND)
}

fn fault<T>(event: &str, message: &str, err: &StoreError) -> Envelope<T> {
    error!("event={event} module=gateway status=error error={err}");
    Envelope::internal(message)
}
