use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::ProductId;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn get_product(
    State(state): State<AppState>,
    product_id: Result<Path<String>, PathRejection>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id = parse_product_id(product_id)?;

    state
        .product_service
        .get_product(&product_id)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

/// Parse the `:product_id` path segment; malformed ids are a 400.
pub(super) fn parse_product_id(
    path: Result<Path<String>, PathRejection>,
) -> Result<ProductId, ApiError> {
    let Path(raw) = path?;
    ProductId::from_string(&raw)
        .map_err(ProductError::from)
        .map_err(ApiError::from)
}
