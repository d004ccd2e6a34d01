use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct DeleteProductParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Soft delete: marks the product inactive and returns it. Deleting an
    /// already-inactive product succeeds and re-returns the record.
    async fn execute(&self, params: DeleteProductParams) -> Result<Product, ProductError>;
}
