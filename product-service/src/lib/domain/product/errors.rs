use thiserror::Error;

/// Error type for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Product invariant violations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ProductValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("price is required")]
    PriceRequired,
}

/// Error type for list query parameters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductQueryError {
    #[error("Invalid sort order: {0} (expected asc or desc)")]
    InvalidSort(String),
}

/// Top-level error type for all product-related operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid product ID: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error("Invalid product: {0}")]
    Validation(#[from] ProductValidationError),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] ProductQueryError),

    #[error("Product not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ProductError {
    fn from(err: anyhow::Error) -> Self {
        ProductError::Unknown(err.to_string())
    }
}
