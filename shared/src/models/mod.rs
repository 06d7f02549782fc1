//! Data models
//!
//! Mirror the JSON shapes of the remote catalog API. Deserialization is
//! lenient: the API is public and records created by third parties are often
//! incomplete.

pub mod category;
pub mod product;

// Re-exports
pub use category::*;
pub use product::*;
