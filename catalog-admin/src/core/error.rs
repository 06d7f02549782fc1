//! Console error type

use catalog_client::ClientError;
use shared::{ProductId, ValidationError};
use thiserror::Error;

use crate::catalog::export::ExportError;

#[derive(Debug, Error)]
pub enum AdminError {
    /// Request failed or returned a non-success status
    #[error(transparent)]
    Network(#[from] ClientError),

    /// Form rejected locally; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// Edit requested for an id that is not in the current collection
    #[error("Product {0} not found")]
    UnknownProduct(ProductId),
}

pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
