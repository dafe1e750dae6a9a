use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::product::errors::ProductIdError;
use crate::domain::product::errors::ProductQueryError;
use crate::domain::product::errors::ProductValidationError;

/// Product unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// Generate a new random product ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a product ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        Uuid::parse_str(s)
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product aggregate entity.
///
/// Values built through [`Product::new`] always satisfy the invariants.
/// Values assembled field by field (storage rows, updates) must pass
/// [`Product::validate`] before they are persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh ID.
    ///
    /// # Arguments
    /// * `name` - Product name, must not be empty
    /// * `price` - Unit price, must be strictly positive
    ///
    /// # Errors
    /// * `NameRequired` - Name is empty
    /// * `PriceRequired` - Price is zero, negative or NaN
    pub fn new(name: String, price: f64) -> Result<Self, ProductValidationError> {
        let product = Self {
            id: ProductId::new(),
            name,
            price,
            created_at: Utc::now(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Re-check the invariants of an existing value.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.is_empty() {
            return Err(ProductValidationError::NameRequired);
        }
        // Written as a negated comparison so NaN fails as well.
        if !(self.price > 0.0) {
            return Err(ProductValidationError::PriceRequired);
        }
        Ok(())
    }
}

/// Command to create a product from raw input.
#[derive(Debug)]
pub struct CreateProductCommand {
    pub name: String,
    pub price: f64,
}

/// Command replacing the mutable fields of an existing product.
#[derive(Debug)]
pub struct UpdateProductCommand {
    pub name: String,
    pub price: f64,
}

/// Ordering of product listings by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ProductQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ProductQueryError::InvalidSort(other.to_string())),
        }
    }
}

/// Page selection for product listings.
///
/// `page` is 1-based; a `limit` of zero disables paging and returns everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductPage {
    pub page: u32,
    pub limit: u32,
    pub sort: SortOrder,
}

impl ProductPage {
    pub fn new(page: u32, limit: u32, sort: SortOrder) -> Self {
        Self {
            page: page.max(1),
            limit,
            sort,
        }
    }

    /// Number of rows to skip, zero when paging is disabled.
    pub fn offset(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            u64::from(self.page - 1) * u64::from(self.limit)
        }
    }
}

impl Default for ProductPage {
    fn default() -> Self {
        Self::new(1, 0, SortOrder::Asc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_success() {
        let product = Product::new("Widget".to_string(), 10.0).expect("Failed to create product");

        assert!(!product.id.0.is_nil());
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 10.0);
        assert_eq!(product.validate(), Ok(()));
    }

    #[test]
    fn test_new_product_generates_distinct_ids() {
        let first = Product::new("Widget".to_string(), 10.0).unwrap();
        let second = Product::new("Widget".to_string(), 10.0).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_new_product_name_required() {
        for price in [10.0, 0.0, -3.5] {
            assert_eq!(
                Product::new(String::new(), price),
                Err(ProductValidationError::NameRequired)
            );
        }
    }

    #[test]
    fn test_new_product_price_required() {
        for price in [0.0, -0.0, -1.0, -1000.25, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(
                Product::new("Widget".to_string(), price),
                Err(ProductValidationError::PriceRequired),
                "price {} should be rejected",
                price
            );
        }
    }

    #[test]
    fn test_validate_catches_mutated_product() {
        let mut product = Product::new("Widget".to_string(), 10.0).unwrap();

        product.price = 0.0;
        assert_eq!(product.validate(), Err(ProductValidationError::PriceRequired));

        product.price = 5.0;
        product.name.clear();
        assert_eq!(product.validate(), Err(ProductValidationError::NameRequired));
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(ProductPage::new(1, 10, SortOrder::Asc).offset(), 0);
        assert_eq!(ProductPage::new(3, 10, SortOrder::Asc).offset(), 20);
        assert_eq!(ProductPage::new(0, 10, SortOrder::Asc).page, 1);
        assert_eq!(ProductPage::new(5, 0, SortOrder::Asc).offset(), 0);
    }
}
