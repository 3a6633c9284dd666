//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire config, logging and the gateway together outside of any UI.
//! - Print each envelope as one JSON line for quick local sanity checks.

use log::warn;
use serde::Serialize;
use tasklist_core::{CoreConfig, Envelope, InMemoryTodoRepository, TodoFilters, TodoGateway};

fn main() {
    let config = CoreConfig::from_env();
    if let Err(err) = config.init_logging() {
        eprintln!("tasklist logging disabled: {err}");
    }

    println!("tasklist_core version={}", tasklist_core::core_version());

    let gateway = TodoGateway::new(InMemoryTodoRepository::new());
    let milk = gateway.create("Buy milk", None);
    print_envelope("create", &milk);
    print_envelope("create", &gateway.create("Walk dog", Some("around the block")));
    print_envelope("create", &gateway.create("   ", None));

    if let Some(todo) = milk.data.as_ref() {
        print_envelope("toggle", &gateway.toggle(todo.id.as_str()));
    }
    print_envelope("view", &gateway.view(&TodoFilters::default()));
    print_envelope("stats", &gateway.stats());
    print_envelope("delete_completed", &gateway.delete_completed());
    print_envelope("list", &gateway.list());
}

fn print_envelope<T: Serialize>(command: &str, envelope: &Envelope<T>) {
    match serde_json::to_string(envelope) {
        Ok(json) => println!("{command} status={} {json}", envelope.outcome.status_code()),
        Err(err) => warn!("event=cli_print module=cli status=error command={command} error={err}"),
    }
}
