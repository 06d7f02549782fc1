//! Error types shared across the workspace
//!
//! Network failures live in `catalog-client` (`ClientError`); this module
//! holds the client-side form errors, which never reach the network layer.

mod validation;

pub use validation::{FieldError, FormField, ValidationError};
