use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::ProductStatus;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }

        if props.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        if props.price < 0.0 {
            return Err(ProductError::PriceNegative);
        }

        // The URL comes from a successful upload, so this only trips if the
        // storage provider returned garbage.
        if props.image_url.trim().is_empty() {
            return Err(ProductError::ImageRequired);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            category: props.category,
            image_url: props.image_url,
            status: ProductStatus::Active,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: f64,
        category: String,
        image_url: String,
        status: ProductStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            category,
            image_url,
            status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_props() -> NewProductProps {
        NewProductProps {
            name: "Olive Oil".to_string(),
            description: "Extra virgin, 750ml".to_string(),
            price: 9.99,
            category: "pantry".to_string(),
            image_url: "https://res.example.com/products/olive-oil.jpg".to_string(),
        }
    }

    #[test]
    fn should_create_active_product_with_generated_id() {
        let product = Product::new(valid_props()).unwrap();

        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.name, "Olive Oil");
        assert!(!product.id.is_nil());
    }

    #[test]
    fn should_reject_empty_name() {
        let mut props = valid_props();
        props.name = "   ".to_string();

        assert!(matches!(
            Product::new(props).unwrap_err(),
            ProductError::NameEmpty
        ));
    }

    #[test]
    fn should_reject_empty_description() {
        let mut props = valid_props();
        props.description = "".to_string();

        assert!(matches!(
            Product::new(props).unwrap_err(),
            ProductError::DescriptionEmpty
        ));
    }

    #[test]
    fn should_reject_empty_category() {
        let mut props = valid_props();
        props.category = "".to_string();

        assert!(matches!(
            Product::new(props).unwrap_err(),
            ProductError::CategoryEmpty
        ));
    }

    #[test]
    fn should_reject_negative_price() {
        let mut props = valid_props();
        props.price = -0.01;

        assert!(matches!(
            Product::new(props).unwrap_err(),
            ProductError::PriceNegative
        ));
    }

    #[test]
    fn should_accept_zero_price() {
        let mut props = valid_props();
        props.price = 0.0;

        assert!(Product::new(props).is_ok());
    }

    #[test]
    fn should_reject_empty_image_url() {
        let mut props = valid_props();
        props.image_url = "".to_string();

        assert!(matches!(
            Product::new(props).unwrap_err(),
            ProductError::ImageRequired
        ));
    }
}
