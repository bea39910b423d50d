//! # Generic Messages
//!
//! Request types sent from a [`ResourceClient`](crate::ResourceClient) to a
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants mirror the [`EntityStore`](crate::EntityStore) operations one to
/// one, so the actor loop is a plain dispatch:
///
/// - **Create**: builds a resource from [`ActorEntity::Create`].
/// - **Get**: fetches a snapshot of one resource.
/// - **List**: fetches snapshots of every resource, in creation order.
/// - **Delete**: removes a resource.
/// - **Action**: executes a custom [`ActorEntity::Action`].
/// - **Tick**: delivers one periodic tick to every resource.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Tick {
        respond_to: Response<usize>,
    },
}
