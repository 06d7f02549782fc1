//! Product form validation
//!
//! Same rules for the edit and the create form. Failures are collected per
//! field and never reach the network layer.

use shared::types::{DEFAULT_CATEGORY_ID, NEW_PRODUCT_PLACEHOLDER_IMAGE};
use shared::{FieldError, FormField, ProductCreate, ProductUpdate, ValidationError};

// ── Length limits ───────────────────────────────────────────────────

/// Minimum title length, counted in characters after trimming
pub const MIN_TITLE_LEN: usize = 3;

/// Minimum description length, counted in characters after trimming
pub const MIN_DESCRIPTION_LEN: usize = 5;

/// Raw text of the edit/create form, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    /// Create form only
    pub category_id: String,
    /// Create form only; one URL per line
    pub images: String,
}

/// Fields that passed validation, trimmed and parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
}

impl ValidProduct {
    pub fn into_update(self) -> ProductUpdate {
        ProductUpdate {
            title: self.title,
            price: self.price,
            description: self.description,
        }
    }

    /// Category and images come from the create form, with its defaults
    pub fn into_create(self, form: &ProductForm) -> ProductCreate {
        ProductCreate {
            title: self.title,
            price: self.price,
            description: self.description,
            category_id: parse_category_id(&form.category_id),
            images: parse_images(&form.images),
        }
    }
}

/// Validate title/price/description
pub fn validate_product_form(form: &ProductForm) -> Result<ValidProduct, ValidationError> {
    let mut errors = Vec::new();

    let title = form.title.trim();
    if title.chars().count() < MIN_TITLE_LEN {
        errors.push(FieldError::new(
            FormField::Title,
            format!("title must be at least {MIN_TITLE_LEN} characters"),
        ));
    }

    let price = parse_price(&form.price);
    if price.is_none() {
        errors.push(FieldError::new(
            FormField::Price,
            "price must be a positive number",
        ));
    }

    let description = form.description.trim();
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.push(FieldError::new(
            FormField::Description,
            format!("description must be at least {MIN_DESCRIPTION_LEN} characters"),
        ));
    }

    match price {
        Some(price) if errors.is_empty() => Ok(ValidProduct {
            title: title.to_string(),
            price,
            description: description.to_string(),
        }),
        _ => Err(ValidationError::new(errors)),
    }
}

/// Finite and strictly positive
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

/// Blank or unparsable input falls back to the default category
pub fn parse_category_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(DEFAULT_CATEGORY_ID)
}

/// Non-empty trimmed lines, or the placeholder image when there are none
pub fn parse_images(raw: &str) -> Vec<String> {
    let images: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if images.is_empty() {
        vec![NEW_PRODUCT_PLACEHOLDER_IMAGE.to_string()]
    } else {
        images
    }
}
