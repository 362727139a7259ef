//! Shared infrastructure for resource lifecycle handlers.
//!
//! - **[`ResourceData<M>`]**: the decoded model plus its durable handle
//! - **[`ResourceTimeouts`]**: per-operation upper bounds
//! - **[`ResourceSchema`]**: static attribute descriptors for the host
//! - **[`ResourceError`]**: the error type every handler returns
//!
//! Concrete resources live under [`crate::services`].

mod data;
mod errors;
mod schema;
mod timeouts;

pub use data::ResourceData;
pub use errors::ResourceError;
pub use schema::{Attribute, AttributeType, ResourceSchema, ValidationRule};
pub use timeouts::ResourceTimeouts;
