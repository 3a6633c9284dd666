//! Derived views and aggregate statistics.
//!
//! # Invariants
//! - Every function here is pure over its inputs and never mutates them.
//! - Nothing is cached: callers re-derive after each store mutation.

use crate::model::todo::{Todo, TodoId};
use crate::query::filters::{SortMode, TodoFilters};
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Aggregate counts over a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    /// Rounded integer percentage; 0 for an empty collection.
    pub completion_rate: u32,
}

/// Filters then orders `todos` according to `filters`.
///
/// Steps, in order: search match on title or description, drop completed
/// records when `show_completed` is off, then a stable sort by `sort_by`.
pub fn view(todos: &[Todo], filters: &TodoFilters) -> Vec<Todo> {
    let needle = filters.search.to_lowercase();
    let mut visible: Vec<Todo> = todos
        .iter()
        .filter(|todo| todo.matches_search(&needle))
        .filter(|todo| filters.show_completed || !todo.completed)
        .cloned()
        .collect();

    match filters.sort_by {
        SortMode::Newest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Oldest => visible.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::Alphabetical => {
            let mut collator = Collator::default();
            visible.sort_by(|a, b| compare_titles(&mut collator, &a.title, &b.title));
        }
        SortMode::CompletedFirst => visible.sort_by(|a, b| b.completed.cmp(&a.completed)),
        SortMode::Unrecognized => {}
    }

    visible
}

/// Computes aggregate counts for `todos`.
pub fn stats(todos: &[Todo]) -> TodoStats {
    let total = todos.len();
    let completed = todos.iter().filter(|todo| todo.completed).count();

    TodoStats {
        total,
        completed,
        remaining: total - completed,
        completion_rate: completion_rate(completed, total),
    }
}

/// Completed records in collection order.
pub fn completed(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.completed).cloned().collect()
}

/// Incomplete records in collection order.
pub fn incomplete(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| !todo.completed).cloned().collect()
}

pub fn find_by_id<'a>(todos: &'a [Todo], id: &TodoId) -> Option<&'a Todo> {
    todos.iter().find(|todo| &todo.id == id)
}

/// `round(completed / total * 100)` with halves rounded up.
fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rate = (completed * 200 + total) / (total * 2);
    u32::try_from(rate).unwrap_or(100)
}

// Unicode root collation: accents and case only break ties, lowercase first.
fn compare_titles(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b)
}

#[cfg(test)]
mod tests {
    use super::{compare_titles, completion_rate, stats};
    use crate::model::todo::{Todo, TodoId};
    use feruca::Collator;
    use std::cmp::Ordering;

    #[test]
    fn completion_rate_rounds_half_up_and_handles_empty() {
        assert_eq!(completion_rate(0, 0), 0);
        assert_eq!(completion_rate(1, 2), 50);
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 8), 13);
        assert_eq!(completion_rate(3, 3), 100);
    }

    #[test]
    fn titles_compare_case_insensitively() {
        let mut collator = Collator::default();
        assert_eq!(compare_titles(&mut collator, "apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles(&mut collator, "Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_titles(&mut collator, "a", "A"), Ordering::Less);
    }

    #[test]
    fn accented_titles_sort_with_their_base_letters() {
        let mut collator = Collator::default();
        assert_eq!(compare_titles(&mut collator, "éclair", "orange"), Ordering::Less);
        assert_eq!(compare_titles(&mut collator, "apple", "éclair"), Ordering::Less);
        assert_eq!(compare_titles(&mut collator, "Öl", "orange"), Ordering::Less);
        assert_eq!(compare_titles(&mut collator, "e", "é"), Ordering::Less);
    }

    #[test]
    fn stats_counts_remaining() {
        let todos: Vec<Todo> = (0..4)
            .map(|index| Todo {
                id: TodoId::new(index.to_string()),
                title: format!("t{index}"),
                description: String::new(),
                completed: index == 0,
                created_at: index,
                updated_at: index,
            })
            .collect();
        let computed = stats(&todos);
        assert_eq!(computed.total, 4);
        assert_eq!(computed.completed, 1);
        assert_eq!(computed.remaining, 3);
        assert_eq!(computed.completion_rate, 25);
    }
}
