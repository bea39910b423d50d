//! # Generic Actor Server
//!
//! `ResourceActor` owns an [`EntityStore`] and the receiving end of a channel. It
//! processes one [`ResourceRequest`] at a time, so user actions and timer ticks
//! interleave only at message boundaries and each handler runs to completion.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::message::ResourceRequest;
use crate::store::EntityStore;
use tokio::sync::mpsc;
use tracing::info;

/// The generic actor that serves a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `ResourceActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Wire**: pass the entity context into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use shop_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32, seat: String }
/// #[derive(Debug)] struct TicketCreate { seat: String }
/// #[derive(Debug)] enum TicketAction {}
/// #[derive(Debug)] struct TicketError;
/// impl std::fmt::Display for TicketError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "ticket error") }
/// }
/// impl std::error::Error for TicketError {}
///
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = TicketCreate;
///     type Action = TicketAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TicketError;
///
///     fn from_create_params(id: u32, p: TicketCreate, _: &()) -> Result<Self, TicketError> {
///         Ok(Self { id, seat: p.seat })
///     }
///     fn handle_action(&mut self, a: TicketAction, _: &()) -> Result<(), TicketError> {
///         match a {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Ticket>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(TicketCreate { seat: "12A".into() }).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().seat, "12A");
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: EntityStore::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client (and ticker) is dropped.
    ///
    /// `context` is handed to every entity hook for the lifetime of the loop.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = EntityStore::<T>::entity_type();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.store.create(params, &context));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.iter().cloned().collect()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.store.delete(&id, &context));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.store.perform_action(&id, action, &context));
                }
                ResourceRequest::Tick { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.tick_all(&context)));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
