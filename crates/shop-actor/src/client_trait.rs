//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list` and
//! `delete` built on top of a generic `ResourceClient`, with framework errors
//! mapped into the resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// # Example
///
/// ```rust
/// use shop_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32 }
/// #[derive(Debug)] struct TicketCreate;
/// #[derive(Debug)] enum TicketAction {}
/// #[derive(Debug)] struct TicketError(String);
/// impl std::fmt::Display for TicketError {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
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
///     fn from_create_params(id: u32, _: TicketCreate, _: &()) -> Result<Self, TicketError> {
///         Ok(Self { id })
///     }
///     fn handle_action(&mut self, a: TicketAction, _: &()) -> Result<(), TicketError> { match a {} }
/// }
///
/// struct TicketClient { inner: ResourceClient<Ticket> }
///
/// impl ActorClient<Ticket> for TicketClient {
///     type Error = TicketError;
///     fn inner(&self) -> &ResourceClient<Ticket> { &self.inner }
///     fn map_error(e: FrameworkError) -> TicketError { TicketError(e.to_string()) }
/// }
///
/// async fn usage(client: TicketClient) {
///     // get(), list() and delete() are provided automatically.
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID, returning the removed entity.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
