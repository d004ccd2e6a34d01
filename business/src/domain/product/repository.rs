use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Persistence port for products.
///
/// The store must enforce a uniqueness constraint on `name` as the backstop
/// for the orchestrator's pre-check; `insert` and `update` report violations
/// as `RepositoryError::Duplicated`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every product, including soft-deleted ones.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Persists the full row; `NotFound` if the id vanished since it was read.
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    /// Sets `status = inactive` unconditionally and returns the updated row.
    /// Idempotent: an already-inactive product is returned unchanged.
    async fn soft_delete(&self, id: Uuid) -> Result<Product, RepositoryError>;
}
