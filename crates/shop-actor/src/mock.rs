//! # Testing Utilities
//!
//! Two ways to test a domain client (e.g. an `OrderClient`) without running a
//! real [`ResourceActor`](crate::ResourceActor):
//!
//! 1. [`MockClient`]: queue canned responses up front, then run the client code
//!    and call [`MockClient::verify`].
//! 2. [`create_mock_client`] + the `expect_*` helpers: receive each request
//!    yourself, assert on its payload, and answer through its responder.
//!
//! ```ignore
//! let (client, mut receiver) = create_mock_client::<Order>(10);
//! let task = tokio::spawn(async move { OrderClient::new(client).mark_picked_up(1.into()).await });
//! let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
//! responder.send(Ok(OrderStatus::Completed)).unwrap();
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A queued response, matched against the next request's kind.
enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Delete(Result<T, FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
    Tick(Result<usize, FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are answered strictly in the order expectations were queued; a request
/// of the wrong kind panics the mock task, which surfaces in the test as
/// `ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (ResourceRequest::Tick { respond_to }, Some(Expectation::Tick(r))) => {
                        let _ = respond_to.send(r);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Create)
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Get)
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::List)
    }

    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Delete)
    }

    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Action)
    }

    pub fn expect_tick(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Tick)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that queues one response of type `R`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(expectations: Queue<T>, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Responder half handed back by the `expect_*` helpers.
pub type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Delete.
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Returns the next request's responder if it is a Tick.
pub async fn expect_tick<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Responder<usize>> {
    match receiver.recv().await {
        Some(ResourceRequest::Tick { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Booking {
        id: u32,
        guest: String,
    }

    #[derive(Debug)]
    struct BookingCreate {
        guest: String,
    }

    #[derive(Debug)]
    enum BookingAction {
        Confirm,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Booking error")]
    struct BookingError;

    impl ActorEntity for Booking {
        type Id = u32;
        type Create = BookingCreate;
        type Action = BookingAction;
        type ActionResult = bool;
        type Context = ();
        type Error = BookingError;

        fn from_create_params(id: u32, params: BookingCreate, _: &()) -> Result<Self, BookingError> {
            Ok(Self {
                id,
                guest: params.guest,
            })
        }

        fn handle_action(&mut self, _action: BookingAction, _: &()) -> Result<bool, BookingError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_channel_helpers() {
        let (client, mut receiver) = create_mock_client::<Booking>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(BookingCreate {
                    guest: "Ayla".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.guest, "Ayla");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Booking>::new();
        mock.expect_create().return_ok(1);
        mock.expect_action().return_ok(true);
        mock.expect_tick().return_ok(0);
        mock.expect_get().return_ok(Some(Booking {
            id: 1,
            guest: "Ayla".to_string(),
        }));

        let client = mock.client();
        let id = client
            .create(BookingCreate {
                guest: "Ayla".to_string(),
            })
            .await
            .unwrap();
        assert!(client.perform_action(id, BookingAction::Confirm).await.unwrap());
        assert_eq!(client.tick().await.unwrap(), 0);
        assert_eq!(client.get(id).await.unwrap().unwrap().guest, "Ayla");

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_returns_errors() {
        let mut mock = MockClient::<Booking>::new();
        mock.expect_delete()
            .return_err(FrameworkError::NotFound("9".to_string()));

        let result = mock.client().delete(9).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "9"));
        mock.verify();
    }
}
