use serde_json::json;
use todo_api::lifecycle::TodoSystem;
use todo_api::model::TodoId;
use todo_api::service::Page;
use todo_api::todo_actor::TodoError;

/// The canonical flow: create two records, list them in order, delete the
/// first, observe NotFound, and confirm the freed id is never reused.
#[tokio::test]
async fn test_canonical_scenario() {
    let system = TodoSystem::new();

    let first = system
        .todos
        .create_todo(&json!({"text": "Buy milk"}))
        .await
        .expect("Failed to create first todo");
    assert_eq!(first.id, TodoId(1));
    assert_eq!(first.text, "Buy milk");
    assert!(!first.is_done); // default applied

    let second = system
        .todos
        .create_todo(&json!({"text": "Call Bob", "is_done": true}))
        .await
        .expect("Failed to create second todo");
    assert_eq!(second.id, TodoId(2));
    assert!(second.is_done);

    // Both records, in insertion order
    let page = system
        .todos
        .list_todos(Page::default())
        .await
        .expect("Failed to list todos");
    assert_eq!(page, vec![first.clone(), second.clone()]);

    // Delete the first, then lookups name the missing id
    system
        .todos
        .delete_todo(first.id)
        .await
        .expect("Failed to delete todo");

    let err = system.todos.get_todo(first.id).await.unwrap_err();
    assert_eq!(err, TodoError::NotFound("1".into()));
    assert_eq!(err.to_string(), "Todo 1 not found");
    assert_eq!(err.http_status(), 404);

    // A new record never reuses the deleted id
    let third = system
        .todos
        .create_todo(&json!({"text": "New"}))
        .await
        .expect("Failed to create third todo");
    assert_eq!(third.id, TodoId(3));

    system.shutdown().await.expect("Failed to shutdown system");
}

/// A create/get round-trip returns an identical record.
#[tokio::test]
async fn test_create_get_round_trip() {
    let system = TodoSystem::new();

    let created = system
        .todos
        .create_todo(&json!({"text": "Water plants", "is_done": false}))
        .await
        .unwrap();
    let fetched = system.todos.get_todo(created.id).await.unwrap();
    assert_eq!(fetched, created);

    system.shutdown().await.unwrap();
}

/// Update replaces all fields wholesale; nothing merges with the old record.
#[tokio::test]
async fn test_update_replaces_wholesale() {
    let system = TodoSystem::new();

    let created = system
        .todos
        .create_todo(&json!({"text": "Read book", "is_done": true}))
        .await
        .unwrap();

    // Absent is_done resets to the default rather than keeping `true`.
    let updated = system
        .todos
        .update_todo(created.id, &json!({"text": "Read two books"}))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "Read two books");
    assert!(!updated.is_done);

    let fetched = system.todos.get_todo(created.id).await.unwrap();
    assert_eq!(fetched, updated);

    system.shutdown().await.unwrap();
}

/// A wrong-typed payload is rejected and the store stays untouched.
#[tokio::test]
async fn test_invalid_create_leaves_store_unchanged() {
    let system = TodoSystem::new();

    system
        .todos
        .create_todo(&json!({"text": "Valid"}))
        .await
        .unwrap();

    let err = system
        .todos
        .create_todo(&json!({"is_done": "yes"}))
        .await
        .unwrap_err();
    match &err {
        TodoError::ValidationFailed(violations) => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["text", "is_done"]);
        }
        other => panic!("Expected ValidationFailed, got {other:?}"),
    }
    assert_eq!(err.http_status(), 422);

    // Store size unchanged
    let page = system.todos.list_todos(Page::default()).await.unwrap();
    assert_eq!(page.len(), 1);

    system.shutdown().await.unwrap();
}

/// Update of an unknown id surfaces NotFound, not a silent create.
#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let system = TodoSystem::new();

    let err = system
        .todos
        .update_todo(TodoId(999), &json!({"text": "x"}))
        .await
        .unwrap_err();
    assert_eq!(err, TodoError::NotFound("999".into()));

    system.shutdown().await.unwrap();
}

/// Pagination slices the ordered collection; out-of-range offsets are empty
/// pages, negative parameters are validation failures.
#[tokio::test]
async fn test_pagination() {
    let system = TodoSystem::new();

    for i in 1..=15 {
        system
            .todos
            .create_todo(&json!({ "text": format!("todo {i}") }))
            .await
            .unwrap();
    }

    // Default window: first 10
    let page = system.todos.list_todos(Page::default()).await.unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].id, TodoId(1));
    assert_eq!(page[9].id, TodoId(10));

    // Second window: the remaining 5
    let page = system
        .todos
        .list_todos(Page {
            limit: 10,
            offset: 10,
        })
        .await
        .unwrap();
    assert_eq!(page.len(), 5);
    assert_eq!(page[0].id, TodoId(11));

    // Offset past the end: empty, not an error
    let page = system
        .todos
        .list_todos(Page {
            limit: 10,
            offset: 100,
        })
        .await
        .unwrap();
    assert!(page.is_empty());

    // Negative parameters: ValidationFailed
    let err = system
        .todos
        .list_todos(Page {
            limit: -1,
            offset: 0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TodoError::ValidationFailed(_)));

    system.shutdown().await.unwrap();
}

/// Concurrent creates through cloned service handles: every record gets a
/// distinct id with no gaps.
#[tokio::test]
async fn test_concurrent_creates() {
    let system = TodoSystem::new();

    let mut handles = vec![];
    for i in 0..10 {
        let todos = system.todos.clone();
        handles.push(tokio::spawn(async move {
            todos.create_todo(&json!({ "text": format!("todo {i}") })).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id.0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());

    system.shutdown().await.unwrap();
}

/// Records serialize with a bare integer id, matching the wire shape a
/// transport layer renders.
#[tokio::test]
async fn test_record_wire_shape() {
    let system = TodoSystem::new();

    let todo = system
        .todos
        .create_todo(&json!({"text": "Buy milk"}))
        .await
        .unwrap();
    let rendered = serde_json::to_value(&todo).unwrap();
    assert_eq!(
        rendered,
        json!({"id": 1, "text": "Buy milk", "is_done": false})
    );

    system.shutdown().await.unwrap();
}

/// A client-supplied id on create is ignored; the store assigns its own.
#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let system = TodoSystem::new();

    let todo = system
        .todos
        .create_todo(&json!({"id": 42, "text": "Buy milk"}))
        .await
        .unwrap();
    assert_eq!(todo.id, TodoId(1));

    system.shutdown().await.unwrap();
}
