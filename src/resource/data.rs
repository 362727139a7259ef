//! Per-call resource record handed to the lifecycle handlers.
//!
//! [`ResourceData<M>`] pairs a decoded configuration model with the durable
//! handle the host stores for it. A record is built fresh for every call:
//! [`ResourceData::new`] for a resource being created, and
//! [`ResourceData::from_existing`] for one the host already tracks.
//!
//! # Example
//!
//! ```rust
//! use azurerm_mssql::resource::ResourceData;
//!
//! #[derive(Debug, Clone, Default)]
//! struct Model { name: String }
//!
//! let mut data = ResourceData::new(Model { name: "tg1".to_string() });
//! assert!(data.is_new_resource());
//! assert!(data.id().is_none());
//!
//! // Read the model through Deref
//! assert_eq!(data.name, "tg1");
//!
//! data.set_id("/subscriptions/sub/resourceGroups/rg");
//! assert_eq!(data.id(), Some("/subscriptions/sub/resourceGroups/rg"));
//! ```

use std::ops::{Deref, DerefMut};

/// A configuration model together with its durable handle.
///
/// Implements `Deref<Target = M>` and `DerefMut`, so model fields can be
/// read and written directly.
#[derive(Debug, Clone)]
pub struct ResourceData<M> {
    id: Option<String>,
    model: M,
    is_new_resource: bool,
}

impl<M> ResourceData<M> {
    /// Creates a record for a resource that does not exist yet.
    #[must_use]
    pub const fn new(model: M) -> Self {
        Self {
            id: None,
            model,
            is_new_resource: true,
        }
    }

    /// Creates a record for a resource the host already tracks under `id`.
    #[must_use]
    pub fn from_existing(id: impl Into<String>, model: M) -> Self {
        Self {
            id: Some(id.into()),
            model,
            is_new_resource: false,
        }
    }

    /// Returns the durable handle, or `None` if there is none.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Sets the durable handle.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Clears the durable handle, telling the host the resource is gone.
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Returns `true` while the resource is being created.
    #[must_use]
    pub const fn is_new_resource(&self) -> bool {
        self.is_new_resource
    }

    /// Returns a reference to the model.
    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Returns a mutable reference to the model.
    #[must_use]
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consumes the record and returns the model.
    #[must_use]
    pub fn into_model(self) -> M {
        self.model
    }
}

impl<M> Deref for ResourceData<M> {
    type Target = M;

    fn deref(&self) -> &Self::Target {
        &self.model
    }
}

impl<M> DerefMut for ResourceData<M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.model
    }
}
