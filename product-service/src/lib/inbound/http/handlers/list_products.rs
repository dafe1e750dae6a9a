use std::str::FromStr;

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::ProductPage;
use crate::domain::product::models::SortOrder;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    let Query(query) = query?;
    let page = query.try_into_page()?;

    state
        .product_service
        .list_products(page)
        .await
        .map_err(ApiError::from)
        .map(|products| {
            ApiSuccess::new(
                StatusCode::OK,
                products.iter().map(ProductData::from).collect(),
            )
        })
}

/// `?page=&limit=&sort=`, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListProductsQuery {
    page: Option<u32>,
    limit: Option<u32>,
    sort: Option<String>,
}

impl ListProductsQuery {
    fn try_into_page(self) -> Result<ProductPage, ProductError> {
        let sort = match self.sort.as_deref() {
            None | Some("") => SortOrder::default(),
            Some(raw) => SortOrder::from_str(raw)?,
        };

        Ok(ProductPage::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(0),
            sort,
        ))
    }
}
