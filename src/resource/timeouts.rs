use std::time::Duration;

use serde::Serialize;

/// Upper bounds for each lifecycle operation.
///
/// Defaults: create 60 minutes, read 5 minutes, update 60 minutes, delete
/// 60 minutes.
///
/// # Example
///
/// ```rust
/// use azurerm_mssql::resource::ResourceTimeouts;
/// use std::time::Duration;
///
/// let timeouts = ResourceTimeouts::default().with_read(Duration::from_secs(30));
/// assert_eq!(timeouts.read, Duration::from_secs(30));
/// assert_eq!(timeouts.create, Duration::from_secs(60 * 60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceTimeouts {
    /// Bound for creation.
    pub create: Duration,
    /// Bound for a read.
    pub read: Duration,
    /// Bound for an update.
    pub update: Duration,
    /// Bound for deletion.
    pub delete: Duration,
}

impl Default for ResourceTimeouts {
    fn default() -> Self {
        Self {
            create: Duration::from_secs(60 * 60),
            read: Duration::from_secs(5 * 60),
            update: Duration::from_secs(60 * 60),
            delete: Duration::from_secs(60 * 60),
        }
    }
}

impl ResourceTimeouts {
    /// Returns the create bound for new resources and the update bound otherwise.
    #[must_use]
    pub const fn for_create_update(&self, is_new_resource: bool) -> Duration {
        if is_new_resource {
            self.create
        } else {
            self.update
        }
    }

    /// Overrides the create bound.
    #[must_use]
    pub const fn with_create(mut self, timeout: Duration) -> Self {
        self.create = timeout;
        self
    }

    /// Overrides the read bound.
    #[must_use]
    pub const fn with_read(mut self, timeout: Duration) -> Self {
        self.read = timeout;
        self
    }

    /// Overrides the update bound.
    #[must_use]
    pub const fn with_update(mut self, timeout: Duration) -> Self {
        self.update = timeout;
        self
    }

    /// Overrides the delete bound.
    #[must_use]
    pub const fn with_delete(mut self, timeout: Duration) -> Self {
        self.delete = timeout;
        self
    }
}
