use crate::catalog::CatalogError;
use crate::model::FoodId;
use thiserror::Error;

/// Why an order was not placed. Every variant has already been shown to the user as the
/// order alert.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Order rejected by the catalog: {0}")]
    Rejected(#[from] CatalogError),

    #[error("No detail loaded for {0}")]
    DetailMissing(FoodId),
}
