//! # Entity Store
//!
//! The synchronous heart of the framework: an ordered, in-memory collection of
//! entities plus the id counter. [`ResourceActor`](crate::ResourceActor) wraps one
//! store and feeds it messages; tests and single-threaded callers can drive a store
//! directly with no runtime at all.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Ordered collection of `T` keyed by generated ids.
///
/// Ids come from a `u32` counter starting at 1 and are never reused, so iteration
/// order (by id) is creation order.
pub struct EntityStore<T: ActorEntity> {
    entries: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Short type name used as the `entity_type` log field.
    pub fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// Builds a new entity from `params` and inserts it.
    ///
    /// The id counter only advances when creation succeeds.
    pub fn create(&mut self, params: T::Create, ctx: &T::Context) -> Result<T::Id, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?params, "Create");
        let id = T::Id::from(self.next_id);

        match T::from_create_params(id.clone(), params, ctx) {
            Ok(item) => {
                self.next_id += 1;
                self.entries.insert(id.clone(), item);
                info!(entity_type, %id, size = self.entries.len(), "Created");
                Ok(id)
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                Err(FrameworkError::entity(e))
            }
        }
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let item = self.entries.get(id);
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    /// Removes an entity and returns it.
    pub fn delete(&mut self, id: &T::Id, ctx: &T::Context) -> Result<T, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, "Delete");
        let Some(item) = self.entries.get(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_delete(ctx) {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::entity(e));
        }
        let removed = self
            .entries
            .remove(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        info!(entity_type, %id, size = self.entries.len(), "Deleted");
        Ok(removed)
    }

    pub fn perform_action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?action, "Action");
        let Some(item) = self.entries.get_mut(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let result = item.handle_action(action, ctx).map_err(FrameworkError::entity);
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        result
    }

    /// Delivers one tick to every entity. Returns how many changed.
    pub fn tick_all(&mut self, ctx: &T::Context) -> usize {
        let changed = self
            .entries
            .values_mut()
            .map(|item| item.on_tick(ctx))
            .filter(|changed| *changed)
            .count();
        debug!(entity_type = Self::entity_type(), changed, "Tick");
        changed
    }

    /// Entities in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
