use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ProductStatusDto {
    #[oai(rename = "active")]
    Active,
    #[oai(rename = "inactive")]
    Inactive,
}

impl From<ProductStatus> for ProductStatusDto {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Active => ProductStatusDto::Active,
            ProductStatus::Inactive => ProductStatusDto::Inactive,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty, must be unique)
    pub name: String,
    /// Product description
    pub description: String,
    /// Price (non-negative)
    pub price: f64,
    /// Product category
    pub category: String,
    /// Image bytes, base64-encoded. Required and non-empty; the stored image
    /// URL is derived from this upload and cannot be supplied directly.
    pub image_data: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty, must be unique)
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Product description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Price (non-negative)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Product category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Replacement image bytes, base64-encoded
    #[oai(skip_serializing_if_is_none)]
    pub new_image_data: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price
    pub price: f64,
    /// Product category
    pub category: String,
    /// Public URL of the product image
    pub image_url: String,
    /// Lifecycle status
    pub status: ProductStatusDto,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image_url: product.image_url,
            status: product.status.into(),
            created_at: product.created_at,
        }
    }
}
