//! Type-safe wrappers around [`ResourceClient`](shop_actor::ResourceClient).

pub mod order_client;

pub use order_client::*;
