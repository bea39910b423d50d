//! # Shop Actor
//!
//! Building blocks for serving in-memory resources from a single owner task. A
//! resource type implements [`ActorEntity`]; an [`EntityStore`] holds the
//! collection; a [`ResourceActor`] wraps the store behind a channel and processes
//! one request at a time; [`ResourceClient`] is the cloneable sending side; a
//! [`Ticker`] turns wall-clock time into periodic ticks.
//!
//! ## Why one owner task?
//!
//! A shop counter has exactly one logical actor: staff actions and the countdown
//! timer must never interleave mid-update. Routing every mutation through one
//! channel gives that ordering for free, with no locks around the store.
//!
//! ```text
//!  presentation ──┐
//!                 ├─► ResourceClient ──mpsc──► ResourceActor ──► EntityStore<T>
//!  Ticker ────────┘                                   │
//!                  ◄──────────── oneshot ─────────────┘
//! ```
//!
//! ## Layers
//!
//! - **Synchronous core**: [`EntityStore`] and the [`ActorEntity`] hooks are plain
//!   functions. They can be exercised directly in unit tests with no runtime.
//! - **Actor shell**: [`ResourceActor::run`] dispatches [`ResourceRequest`]s to
//!   the store and answers through oneshot channels.
//! - **Clients**: [`ResourceClient`] plus the [`ActorClient`] trait for domain
//!   wrappers that map [`FrameworkError`] into their own error type.
//! - **Time**: [`Ticker`] is the only component that reads a clock.
//!
//! ## Context injection
//!
//! Settings an entity needs (durations, clocks) are passed to
//! [`ResourceActor::run`] rather than stored on each entity, and reach every hook
//! by reference.
//!
//! ## Testing
//!
//! See [`mock`] for [`MockClient`](mock::MockClient) and the channel helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod ticker;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::EntityStore;
pub use ticker::Ticker;
