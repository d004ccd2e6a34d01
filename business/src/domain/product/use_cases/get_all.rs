use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    /// Returns every product, including inactive ones. Callers that only
    /// want live records must filter on `status` themselves.
    async fn execute(&self) -> Result<Vec<Product>, ProductError>;
}
