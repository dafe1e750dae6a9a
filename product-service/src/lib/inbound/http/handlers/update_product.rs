use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_product::ProductRequest;
use super::get_product::parse_product_id;
use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::UpdateProductCommand;
use crate::inbound::http::router::AppState;

/// Replace name and price of an existing product.
pub async fn update_product(
    State(state): State<AppState>,
    product_id: Result<Path<String>, PathRejection>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id = parse_product_id(product_id)?;
    let Json(body) = body?;

    state
        .product_service
        .update_product(
            &product_id,
            UpdateProductCommand {
                name: body.name,
                price: body.price,
            },
        )
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
