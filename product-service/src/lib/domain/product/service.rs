use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductPage;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
///
/// Guards the product invariants before anything reaches the repository.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn create_product(&self, command: CreateProductCommand) -> Result<Product, ProductError> {
        let product = Product::new(command.name, command.price)?;

        let created = self.repository.create(product).await?;
        tracing::info!(product_id = %created.id, "Product created");

        Ok(created)
    }

    async fn list_products(&self, page: ProductPage) -> Result<Vec<Product>, ProductError> {
        self.repository.find_all(page).await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    async fn update_product(
        &self,
        id: &ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError> {
        let mut product = self.get_product(id).await?;

        product.name = command.name;
        product.price = command.price;
        product.validate()?;

        let updated = self.repository.update(product).await?;
        tracing::info!(product_id = %updated.id, "Product updated");

        Ok(updated)
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError> {
        self.repository.delete(id).await?;
        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }
}
