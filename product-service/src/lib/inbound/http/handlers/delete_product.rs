use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::get_product::parse_product_id;
use super::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_product(
    State(state): State<AppState>,
    product_id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let product_id = parse_product_id(product_id)?;

    state
        .product_service
        .delete_product(&product_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
