//! Demo binary: walks the canonical todo flow against a live system.
//!
//! Run with `RUST_LOG=info cargo run` (or `debug` for full payloads).

use resource_actor::tracing::setup_tracing;
use serde_json::json;
use todo_api::lifecycle::TodoSystem;
use todo_api::service::Page;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting todo service");

    let system = TodoSystem::new();

    // Seed a couple of records
    let span = tracing::info_span!("seeding");
    let first = async {
        info!("Creating todos");
        let first = system
            .todos
            .create_todo(&json!({"text": "Buy milk"}))
            .await
            .map_err(|e| e.to_string())?;
        info!(id = %first.id, "Todo created");

        let second = system
            .todos
            .create_todo(&json!({"text": "Call Bob", "is_done": true}))
            .await
            .map_err(|e| e.to_string())?;
        info!(id = %second.id, "Todo created");

        Ok::<_, String>(first)
    }
    .instrument(span)
    .await?;

    // List the collection
    let page = system
        .todos
        .list_todos(Page::default())
        .await
        .map_err(|e| e.to_string())?;
    info!(count = page.len(), "Listed todos");

    // Full-payload update: absent is_done would reset to false
    let updated = system
        .todos
        .update_todo(first.id, &json!({"text": "Buy milk", "is_done": true}))
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %updated.id, is_done = updated.is_done, "Todo updated");

    // Delete, then show the not-found protocol
    system
        .todos
        .delete_todo(first.id)
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %first.id, "Todo deleted");

    match system.todos.get_todo(first.id).await {
        Ok(todo) => info!(id = %todo.id, "Unexpected: todo still present"),
        Err(e) => info!(status = e.http_status(), %e, "Lookup after delete"),
    }

    // Show the validation protocol
    if let Err(e) = system.todos.create_todo(&json!({"is_done": "yes"})).await {
        error!(status = e.http_status(), %e, "Rejected invalid payload");
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Done");
    Ok(())
}
