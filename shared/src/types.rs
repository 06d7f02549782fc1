//! Common types for the shared crate

/// Remote product identifier (integer primary key of the catalog API)
pub type ProductId = i64;

/// Category assigned to created products when the form leaves it blank
pub const DEFAULT_CATEGORY_ID: i64 = 1;

/// Image used for created products when the form lists none
pub const NEW_PRODUCT_PLACEHOLDER_IMAGE: &str = "https://placehold.co/640x480?text=New+Product";
