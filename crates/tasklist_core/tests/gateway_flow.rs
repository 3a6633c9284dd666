use std::sync::Arc;
use tasklist_core::{
    InMemoryTodoRepository, ManualClock, Outcome, SortMode, TodoFilters, TodoGateway, TodoPatch,
    TodoRepository,
};

fn gateway() -> TodoGateway<InMemoryTodoRepository> {
    TodoGateway::new(InMemoryTodoRepository::with_clock(Arc::new(
        ManualClock::new(1_700_000_000_000),
    )))
}

#[test]
fn buy_milk_walk_dog_scenario() {
    let gateway = gateway();
    let milk = gateway.create("Buy milk", None).into_data().unwrap();
    let dog = gateway.create("Walk dog", None).into_data().unwrap();

    let listed = gateway.list().into_data().unwrap();
    assert_eq!(listed, vec![dog.clone(), milk.clone()]);

    let toggled = gateway.toggle(milk.id.as_str());
    assert!(toggled.success);
    let stats = gateway.stats().into_data().unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.remaining, 1);
    assert_eq!(stats.completion_rate, 50);

    let cleared = gateway.delete_completed();
    assert!(cleared.success);
    assert_eq!(cleared.message, "1 completed todos deleted successfully");
    assert!(cleared.data.is_none());

    let remaining = gateway.list().into_data().unwrap();
    assert_eq!(remaining, vec![dog]);
}

#[test]
fn create_returns_created_envelope_with_trimmed_title() {
    let gateway = gateway();
    let response = gateway.create("  Water plants  ", Some("balcony"));

    assert!(response.success);
    assert_eq!(response.outcome, Outcome::Created);
    assert_eq!(response.message, "Todo created successfully");
    let todo = response.data.unwrap();
    assert_eq!(todo.title, "Water plants");
    assert_eq!(todo.description, "balcony");
    assert!(!todo.completed);
    assert_eq!(todo.created_at, todo.updated_at);
}

#[test]
fn invalid_create_adds_nothing() {
    let gateway = gateway();
    for title in ["", "   ", "\t\n", "\u{feff}", " \u{feff}\u{a0} "] {
        let response = gateway.create(title, None);
        assert!(!response.success);
        assert_eq!(response.outcome, Outcome::BadRequest);
        assert_eq!(response.message, "Title is required");
    }

    let too_long = gateway.create(&"x".repeat(201), None);
    assert_eq!(too_long.message, "Title must be less than 200 characters");
    let exact = gateway.create(&"x".repeat(200), None);
    assert!(exact.success);

    let long_description = gateway.create("ok", Some(&"d".repeat(501)));
    assert_eq!(long_description.outcome, Outcome::BadRequest);

    assert_eq!(gateway.repository().list().len(), 1);
}

#[test]
fn read_one_distinguishes_found_and_missing() {
    let gateway = gateway();
    let created = gateway.create("find me", None).into_data().unwrap();

    let found = gateway.get_by_id(created.id.as_str());
    assert_eq!(found.message, "Todo fetched successfully");
    assert_eq!(found.data, Some(created));

    let missing = gateway.get_by_id("404");
    assert!(!missing.success);
    assert_eq!(missing.outcome, Outcome::NotFound);
    assert_eq!(missing.message, "Todo not found");
    assert!(missing.data.is_none());

    assert_eq!(gateway.get_by_id("").outcome, Outcome::NotFound);
}

#[test]
fn update_unknown_id_is_not_found_and_changes_nothing() {
    let gateway = gateway();
    gateway.create("stay", None);
    let before = gateway.list().into_data().unwrap();

    let response = gateway.update("unknown", TodoPatch::title("x"));
    assert_eq!(response.outcome, Outcome::NotFound);
    assert_eq!(response.outcome.status_code(), 404);
    assert_eq!(gateway.list().into_data().unwrap(), before);
}

#[test]
fn invalid_update_is_rejected_before_lookup() {
    let gateway = gateway();
    let todo = gateway.create("keep title", None).into_data().unwrap();

    let response = gateway.update(todo.id.as_str(), TodoPatch::title("   "));
    assert_eq!(response.outcome, Outcome::BadRequest);
    assert_eq!(response.message, "Title is required");

    // Validation wins over not-found.
    let response = gateway.update("unknown", TodoPatch::title(""));
    assert_eq!(response.outcome, Outcome::BadRequest);

    let stored = gateway.get_by_id(todo.id.as_str()).into_data().unwrap();
    assert_eq!(stored, todo);
}

#[test]
fn update_merges_and_refreshes_timestamp() {
    let gateway = gateway();
    let todo = gateway
        .create("draft", Some("notes"))
        .into_data()
        .unwrap();

    let response = gateway.update(
        todo.id.as_str(),
        TodoPatch {
            title: Some(" final ".to_string()),
            completed: Some(true),
            ..TodoPatch::default()
        },
    );
    assert_eq!(response.message, "Todo updated successfully");
    let updated = response.data.unwrap();
    assert_eq!(updated.title, "final");
    assert_eq!(updated.description, "notes");
    assert!(updated.completed);
    assert!(updated.updated_at > todo.updated_at);
    assert_eq!(updated.created_at, todo.created_at);
}

#[test]
fn json_bodies_are_decoded_and_shape_checked() {
    let gateway = gateway();
    let created = gateway.create_json(r#"{"title":"  from json ","description":"raw"}"#);
    assert!(created.success);
    let todo = created.data.unwrap();
    assert_eq!(todo.title, "from json");

    let missing_title = gateway.create_json(r#"{"description":"no title"}"#);
    assert_eq!(missing_title.message, "Title is required");

    let bad_flag = gateway.update_json(todo.id.as_str(), r#"{"completed":"yes"}"#);
    assert_eq!(bad_flag.outcome, Outcome::BadRequest);
    assert!(bad_flag.message.contains("completed"));

    let renamed = gateway.update_json(todo.id.as_str(), r#"{"id":"999","completed":true}"#);
    let renamed = renamed.data.unwrap();
    assert_eq!(renamed.id, todo.id);
    assert!(renamed.completed);
}

#[test]
fn delete_and_toggle_report_missing_ids() {
    let gateway = gateway();
    let todo = gateway.create("short lived", None).into_data().unwrap();

    let deleted = gateway.delete(todo.id.as_str());
    assert!(deleted.success);
    assert_eq!(deleted.message, "Todo deleted successfully");

    assert_eq!(gateway.delete(todo.id.as_str()).outcome, Outcome::NotFound);
    assert_eq!(gateway.toggle(todo.id.as_str()).outcome, Outcome::NotFound);
}

#[test]
fn delete_completed_with_nothing_completed_reports_zero() {
    let gateway = gateway();
    gateway.create("open", None);
    let response = gateway.delete_completed();
    assert!(response.success);
    assert_eq!(response.message, "0 completed todos deleted successfully");
    assert_eq!(gateway.list().into_data().unwrap().len(), 1);
}

#[test]
fn mark_all_complete_twice_keeps_flags_and_advances_stamps() {
    let gateway = gateway();
    gateway.create("one", None);
    gateway.create("two", None);

    let first = gateway.mark_all_complete();
    assert_eq!(first.message, "All todos marked as complete");
    let first = first.data.unwrap();
    let second = gateway.mark_all_complete().data.unwrap();

    assert!(first.iter().all(|todo| todo.completed));
    assert!(second.iter().all(|todo| todo.completed));
    for (before, after) in first.iter().zip(&second) {
        assert!(after.updated_at > before.updated_at);
    }

    let stats = gateway.stats().data.unwrap();
    assert_eq!(stats.remaining, 0);
    assert_eq!(stats.completion_rate, 100);
}

#[test]
fn view_is_rederived_after_every_mutation() {
    let gateway = gateway();
    let filters = TodoFilters::default()
        .with_sort(SortMode::Oldest)
        .with_show_completed(false);
    let first = gateway.create("first", None).into_data().unwrap();
    gateway.create("second", None);

    let before = gateway.view(&filters).data.unwrap();
    assert_eq!(before.len(), 2);
    assert_eq!(before[0].id, first.id);

    gateway.toggle(first.id.as_str());
    let after = gateway.view(&filters).data.unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].title, "second");
}

#[test]
fn envelopes_serialize_to_data_message_success() {
    let gateway = gateway();
    let created = gateway.create("wire", None);
    let json = serde_json::to_value(&created).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Todo created successfully");
    assert_eq!(json["data"]["title"], "wire");
    assert_eq!(json["data"]["completed"], false);
    assert!(json.get("outcome").is_none());

    let missing = serde_json::to_value(gateway.toggle("nope")).unwrap();
    assert!(missing["data"].is_null());
    assert_eq!(missing["success"], false);
}
