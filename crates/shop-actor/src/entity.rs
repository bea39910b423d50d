//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource (an order, a reservation, …)
//! implements to be managed by an [`EntityStore`](crate::EntityStore) and served by a
//! [`ResourceActor`](crate::ResourceActor). It names the associated types for ids,
//! creation payloads, actions, context and errors, and provides the lifecycle hooks
//! (`from_create_params`, `on_delete`, `handle_action`, `on_tick`).
//!
//! # Synchronous hooks
//! Every hook runs to completion inside one store operation. The actor loop calls
//! them one message at a time, so an entity never observes a half-applied change
//! and never needs a lock.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_delete`] defaults to allowing the removal.
//! - [`ActorEntity::on_tick`] defaults to ignoring the tick.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by the framework.
///
/// # Context
/// `Context` is injected into every hook at run time (see
/// [`ResourceActor::run`](crate::ResourceActor::run)). It carries settings and
/// collaborators (clocks, configured durations) that the entity must not own.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so
    /// that iteration follows creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the hooks.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity rather than one per action: clients match on a single
    /// type, at the cost of every action's signature admitting every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    ///
    /// Validation belongs here: returning `Err` leaves the store untouched.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Called immediately before the entity is removed from the store.
    fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called once per periodic tick. Returns `true` if the entity changed.
    fn on_tick(&mut self, _ctx: &Self::Context) -> bool {
        false
    }
}
