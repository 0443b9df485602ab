use resource_actor::{Resource, StoreActor, StoreError};

// --- Test Record ---

#[derive(Clone, Debug, PartialEq)]
struct Note {
    id: u64,
    body: String,
    pinned: bool,
}

#[derive(Debug, Clone)]
struct NoteFields {
    body: String,
    pinned: bool,
}

impl NoteFields {
    fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            pinned: false,
        }
    }
}

impl Resource for Note {
    type Id = u64;
    type Fields = NoteFields;

    fn from_fields(id: u64, fields: NoteFields) -> Self {
        Self {
            id,
            body: fields.body,
            pinned: fields.pinned,
        }
    }

    fn replace(&mut self, fields: NoteFields) {
        self.body = fields.body;
        self.pinned = fields.pinned;
    }

    fn id(&self) -> &u64 {
        &self.id
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = StoreActor::<Note>::new(10);
    tokio::spawn(actor.run());

    // 1. Create
    let note = client.create(NoteFields::new("alpha")).await.unwrap();
    assert_eq!(note.id, 1); // First ID should be 1
    assert_eq!(note.body, "alpha");

    // 2. Round-trip: Get returns the created record
    let fetched = client.get(note.id).await.unwrap().unwrap();
    assert_eq!(fetched, note);

    // 3. Replace swaps all fields, keeps the id
    let replaced = client
        .replace(
            note.id,
            NoteFields {
                body: "beta".into(),
                pinned: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(replaced.id, 1);
    assert_eq!(replaced.body, "beta");
    assert!(replaced.pinned);

    let fetched = client.get(note.id).await.unwrap().unwrap();
    assert_eq!(fetched, replaced);

    // 4. Delete, then Get yields nothing
    client.delete(note.id).await.unwrap();
    assert!(client.get(note.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_ids_are_sequential_and_gap_free() {
    let (actor, client) = StoreActor::<Note>::new(10);
    tokio::spawn(actor.run());

    for expected in 1..=5u64 {
        let note = client
            .create(NoteFields::new(&format!("note {expected}")))
            .await
            .unwrap();
        assert_eq!(note.id, expected);
    }

    let all = client.list(0, 100).await.unwrap();
    let ids: Vec<u64> = all.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_deleted_ids_are_never_reused() {
    let (actor, client) = StoreActor::<Note>::new(10);
    tokio::spawn(actor.run());

    let first = client.create(NoteFields::new("first")).await.unwrap();
    let second = client.create(NoteFields::new("second")).await.unwrap();
    assert_eq!((first.id, second.id), (1, 2));

    client.delete(first.id).await.unwrap();

    // The freed id must not be handed out again.
    let third = client.create(NoteFields::new("third")).await.unwrap();
    assert_eq!(third.id, 3);

    // Remaining records keep their original ids.
    let all = client.list(0, 100).await.unwrap();
    let ids: Vec<u64> = all.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn test_list_slicing_edges() {
    let (actor, client) = StoreActor::<Note>::new(10);
    tokio::spawn(actor.run());

    for i in 1..=3 {
        client
            .create(NoteFields::new(&format!("note {i}")))
            .await
            .unwrap();
    }

    // limit > size returns everything, in insertion order
    let all = client.list(0, 10).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].body, "note 1");
    assert_eq!(all[2].body, "note 3");

    // interior slice
    let middle = client.list(1, 1).await.unwrap();
    assert_eq!(middle.len(), 1);
    assert_eq!(middle[0].body, "note 2");

    // offset at the boundary and beyond yields an empty page, not an error
    assert!(client.list(3, 10).await.unwrap().is_empty());
    assert!(client.list(100, 10).await.unwrap().is_empty());

    // zero limit yields an empty page
    assert!(client.list(0, 0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_replace_preserves_iteration_order() {
    let (actor, client) = StoreActor::<Note>::new(10);
    tokio::spawn(actor.run());

    for i in 1..=3 {
        client
            .create(NoteFields::new(&format!("note {i}")))
            .await
            .unwrap();
    }

    client
        .replace(2, NoteFields::new("note 2 revised"))
        .await
        .unwrap();

    let all = client.list(0, 10).await.unwrap();
    let bodies: Vec<&str> = all.iter().map(|n| n.body.as_str()).collect();
    assert_eq!(bodies, vec!["note 1", "note 2 revised", "note 3"]);
}

#[tokio::test]
async fn test_missing_ids_signal_not_found() {
    let (actor, client) = StoreActor::<Note>::new(10);
    tokio::spawn(actor.run());

    let result = client.replace(999, NoteFields::new("x")).await;
    assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "999"));

    let result = client.delete(999).await;
    assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "999"));

    // Get reports absence as None rather than an error.
    assert!(client.get(999).await.unwrap().is_none());
}

/// Concurrent creates must each receive a distinct id with no gaps.
#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let (actor, client) = StoreActor::<Note>::new(32);
    tokio::spawn(actor.run());

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(NoteFields::new(&format!("note {i}"))).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
}
