//! # Mock Store Clients
//!
//! The [`MockClient`] type speaks the same channel protocol as a real
//! [`StoreActor`](crate::StoreActor) but operates entirely in-memory on a
//! queue of expectations. It lets you write fast, deterministic unit tests
//! for service logic built *around* a [`StoreClient`] without spawning any
//! actors, and makes error injection trivial (`return_err`).
//!
//! Two styles are available:
//!
//! 1. **Expectation queue** ([`MockClient`]) - declare the responses up
//!    front, then call `verify()` to assert every expectation was consumed:
//!
//!    ```ignore
//!    let mut mock = MockClient::<Todo>::new();
//!    mock.expect_get(TodoId(1)).return_ok(Some(todo));
//!    let service = TodoService::new(mock.client());
//!    // ... exercise the service ...
//!    mock.verify();
//!    ```
//!
//! 2. **Raw channel** ([`create_mock_client`] plus the `expect_*` helpers) -
//!    receive each request in the test body and answer through the oneshot
//!    responder. Use this when the test needs to inspect the request payload
//!    itself.
//!
//! For testing the store actor's own semantics (id assignment, ordering),
//! spawn a real actor instead; it is cheap and deterministic enough.

use crate::client::StoreClient;
use crate::entity::Resource;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted response for a single store request.
#[derive(Debug)]
enum Expectation<T: Resource> {
    Create {
        response: Result<T, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Get {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Replace {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Delete {
        #[allow(dead_code)]
        id: T::Id,
        response: Result<(), StoreError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Todo>::new();
/// mock.expect_get(TodoId(1)).return_ok(Some(todo));
/// mock.expect_delete(TodoId(1)).return_ok(());
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: Resource> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Resource> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task that answers each request with the next scripted
        // expectation. A mismatch panics the task, which surfaces in the
        // test as a dropped response channel.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = {
                    let mut exps = expectations_clone.lock().unwrap();
                    exps.pop_front()
                };

                match (request, expectation) {
                    (
                        StoreRequest::Create {
                            fields: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::List {
                            offset: _,
                            limit: _,
                            respond_to,
                        },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Replace {
                            id: _,
                            fields: _,
                            respond_to,
                        },
                        Some(Expectation::Replace { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id: _, respond_to },
                        Some(Expectation::Delete { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `replace` operation.
    pub fn expect_replace(&mut self, id: T::Id) -> ReplaceExpectationBuilder<T> {
        ReplaceExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: Resource> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Resource> CreateExpectationBuilder<T> {
    /// Sets the expectation to return the created record.
    pub fn return_ok(self, record: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Ok(record),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: Resource> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Resource> ListExpectationBuilder<T> {
    /// Sets the expectation to return a page of records.
    pub fn return_ok(self, records: Vec<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Ok(records),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Resource> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Resource> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `replace` expectations.
pub struct ReplaceExpectationBuilder<T: Resource> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Resource> ReplaceExpectationBuilder<T> {
    /// Sets the expectation to return the replaced record.
    pub fn return_ok(self, record: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Replace {
            id: self.id,
            response: Ok(record),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Replace {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: Resource> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Resource> DeleteExpectationBuilder<T> {
    /// Sets the expectation to return success.
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            response: Ok(()),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `StoreActor` if we are just
/// testing the *service* logic around the client. This client sends messages
/// to a channel the test controls; the test inspects each request and answers
/// through its oneshot responder, simulating success, failure, or delay
/// deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: Resource>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Fields,
    tokio::sync::oneshot::Sender<Result<T, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { fields, respond_to }) => Some((fields, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list<T: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    usize,
    usize,
    tokio::sync::oneshot::Sender<Result<Vec<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::List {
            offset,
            limit,
            respond_to,
        }) => Some((offset, limit, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request.
pub async fn expect_get<T: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Replace request.
pub async fn expect_replace<T: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Fields,
    tokio::sync::oneshot::Sender<Result<T, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Replace {
            id,
            fields,
            respond_to,
        }) => Some((id, fields, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request.
pub async fn expect_delete<T: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, tokio::sync::oneshot::Sender<Result<(), StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u64,
        body: String,
    }

    #[derive(Debug)]
    struct NoteFields {
        body: String,
    }

    impl Resource for Note {
        type Id = u64;
        type Fields = NoteFields;

        fn from_fields(id: u64, fields: NoteFields) -> Self {
            Self {
                id,
                body: fields.body,
            }
        }

        fn replace(&mut self, fields: NoteFields) {
            self.body = fields.body;
        }

        fn id(&self) -> &u64 {
            &self.id
        }
    }

    #[tokio::test]
    async fn mock_client_replays_expectations_in_order() {
        let mut mock = MockClient::<Note>::new();
        let note = Note {
            id: 1,
            body: "hello".into(),
        };
        mock.expect_create().return_ok(note.clone());
        mock.expect_get(1).return_ok(Some(note.clone()));
        mock.expect_delete(1).return_ok();

        let client = mock.client();

        let created = client
            .create(NoteFields {
                body: "hello".into(),
            })
            .await
            .unwrap();
        assert_eq!(created, note);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, Some(note));

        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn mock_client_injects_errors() {
        let mut mock = MockClient::<Note>::new();
        mock.expect_get(7).return_err(StoreError::NotFound("7".into()));

        let client = mock.client();
        let result = client.get(7).await;
        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "7"));

        mock.verify();
    }

    #[tokio::test]
    async fn raw_channel_helpers_expose_request_payloads() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let list_task = tokio::spawn(async move { client.list(2, 5).await });

        let (offset, limit, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(offset, 2);
        assert_eq!(limit, 5);
        responder.send(Ok(vec![])).unwrap();

        let page = list_task.await.unwrap().unwrap();
        assert!(page.is_empty());
    }
}
