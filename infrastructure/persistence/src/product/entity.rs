use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductStatus;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    /// A row whose status column holds anything but a known variant is
    /// corrupt; surface that instead of silently resurrecting it as active.
    pub fn try_into_domain(self) -> Result<Product, RepositoryError> {
        let status = self
            .status
            .parse::<ProductStatus>()
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.category,
            self.image_url,
            status,
            self.created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entity(status: &str) -> ProductEntity {
        ProductEntity {
            id: Uuid::new_v4(),
            name: "Widget".to_string(),
            description: "A very useful widget".to_string(),
            price: 9.99,
            category: "tools".to_string(),
            image_url: "https://res.example.com/products/widget.jpg".to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_map_entity_into_domain_product() {
        let entity = make_entity("inactive");
        let id = entity.id;
        let created_at = entity.created_at;

        let product = entity.try_into_domain().unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.status, ProductStatus::Inactive);
        assert_eq!(product.created_at, created_at);
    }

    #[test]
    fn should_reject_row_with_corrupt_status() {
        let entity = make_entity("archived");

        let result = entity.try_into_domain();

        assert!(matches!(result, Err(RepositoryError::DatabaseError)));
    }
}
