pub mod debounce;
pub mod logger;
pub mod validation;

pub use debounce::Debouncer;
pub use logger::init_logger;
pub use validation::{ProductForm, validate_product_form};
