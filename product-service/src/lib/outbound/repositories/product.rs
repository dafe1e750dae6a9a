use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductPage;
use crate::domain::product::models::SortOrder;
use crate::domain::product::ports::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: f64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = ProductError;

    // Rows are re-validated; a stored row breaking the invariants is a storage fault.
    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let product = Product {
            id: ProductId(row.id),
            name: row.name,
            price: row.price,
            created_at: row.created_at,
        };
        product.validate().map_err(|e| {
            ProductError::DatabaseError(format!("stored product {} is invalid: {}", product.id, e))
        })?;
        Ok(product)
    }
}

/// Listing query; `id` breaks ties on `created_at` so pages never overlap.
fn list_query(sort: SortOrder) -> String {
    let direction = sort.as_sql();
    format!(
        r#"
        SELECT id, name, price, created_at
        FROM products
        ORDER BY created_at {direction}, id {direction}
        LIMIT $1 OFFSET $2
        "#
    )
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, price, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(product.id.0)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        row.map(Product::try_from).transpose()
    }

    async fn find_all(&self, page: ProductPage) -> Result<Vec<Product>, ProductError> {
        // LIMIT NULL means no limit in PostgreSQL.
        let limit = (page.limit > 0).then_some(i64::from(page.limit));
        let offset = i64::try_from(page.offset())
            .map_err(|e| ProductError::Unknown(format!("page offset out of range: {}", e)))?;

        let query = list_query(page.sort);

        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3
            WHERE id = $1
            "#,
        )
        .bind(product.id.0)
        .bind(&product.name)
        .bind(product.price)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_orders_with_tiebreaker() {
        assert!(list_query(SortOrder::Asc).contains("ORDER BY created_at ASC, id ASC"));
        assert!(list_query(SortOrder::Desc).contains("ORDER BY created_at DESC, id DESC"));
    }
}
