use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductPage;
use crate::domain::product::models::SortOrder;
use crate::domain::product::ports::ProductRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store keyed by email.
///
/// Enforces email uniqueness like the `users_email_key` constraint does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let key = user.email.as_str().to_string();

        if users.contains_key(&key) {
            return Err(UserError::EmailAlreadyExists(key));
        }

        users.insert(key, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(email.as_str()).cloned())
    }
}

/// Process-local product store, kept in insertion order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == *id)
            .cloned())
    }

    async fn find_all(&self, page: ProductPage) -> Result<Vec<Product>, ProductError> {
        let mut products = self.products.read().await.clone();

        products.sort_by_key(|p| p.created_at);
        if page.sort == SortOrder::Desc {
            products.reverse();
        }

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = if page.limit == 0 {
            usize::MAX
        } else {
            page.limit as usize
        };

        Ok(products.into_iter().skip(offset).take(limit).collect())
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.write().await;

        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| ProductError::NotFound(product.id.to_string()))?;
        *slot = product.clone();

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let mut products = self.products.write().await;

        let position = products
            .iter()
            .position(|p| p.id == *id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        products.remove(position);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new(
            "Ann".to_string(),
            email.to_string(),
            "secret",
            &auth::PasswordHasher::new(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_user_email_is_unique() {
        let repository = InMemoryUserRepository::new();

        repository.create(user("a@x.com")).await.unwrap();
        let result = repository.create(user("a@x.com")).await;

        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let repository = InMemoryUserRepository::new();
        let created = repository.create(user("a@x.com")).await.unwrap();

        let email = EmailAddress::new("a@x.com".to_string()).unwrap();
        let found = repository.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);

        let other = EmailAddress::new("b@x.com".to_string()).unwrap();
        assert!(repository.find_by_email(&other).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_product_crud() {
        let repository = InMemoryProductRepository::new();
        let product = Product::new("Widget".to_string(), 10.0).unwrap();
        let id = product.id;

        repository.create(product).await.unwrap();
        assert_eq!(repository.len().await, 1);

        let mut stored = repository.find_by_id(&id).await.unwrap().unwrap();
        stored.price = 12.0;
        repository.update(stored).await.unwrap();
        assert_eq!(repository.find_by_id(&id).await.unwrap().unwrap().price, 12.0);

        repository.delete(&id).await.unwrap();
        assert!(repository.is_empty().await);
        assert!(matches!(
            repository.delete(&id).await,
            Err(ProductError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_find_all_pages_and_sorts() {
        let repository = InMemoryProductRepository::new();
        for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            let mut product = Product::new(name.to_string(), 1.0).unwrap();
            product.created_at = product.created_at + chrono::Duration::seconds(i as i64);
            repository.create(product).await.unwrap();
        }

        let names = |products: Vec<Product>| -> Vec<String> {
            products.into_iter().map(|p| p.name).collect()
        };

        let all = repository.find_all(ProductPage::default()).await.unwrap();
        assert_eq!(names(all), vec!["a", "b", "c", "d", "e"]);

        let second_page = repository
            .find_all(ProductPage::new(2, 2, SortOrder::Asc))
            .await
            .unwrap();
        assert_eq!(names(second_page), vec!["c", "d"]);

        let newest = repository
            .find_all(ProductPage::new(1, 2, SortOrder::Desc))
            .await
            .unwrap();
        assert_eq!(names(newest), vec!["e", "d"]);
    }
}
