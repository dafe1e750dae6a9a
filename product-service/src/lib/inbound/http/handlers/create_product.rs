use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::CreateProductCommand;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let Json(body) = body?;

    state
        .product_service
        .create_product(CreateProductCommand {
            name: body.name,
            price: body.price,
        })
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

/// Request body shared by product creation and replacement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
}
