use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageStorageService;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_storage: Arc<dyn ImageStorageService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if let Some(name) = &params.name {
            if name.trim().is_empty() {
                return Err(ProductError::NameEmpty);
            }
            // Only a rename needs the uniqueness pre-check; keeping the
            // current name is always allowed.
            if *name != existing.name && self.repository.find_by_name(name).await?.is_some() {
                return Err(ProductError::NameTaken);
            }
        }
        if let Some(description) = &params.description
            && description.trim().is_empty()
        {
            return Err(ProductError::DescriptionEmpty);
        }
        if let Some(category) = &params.category
            && category.trim().is_empty()
        {
            return Err(ProductError::CategoryEmpty);
        }
        if let Some(price) = params.price
            && price < 0.0
        {
            return Err(ProductError::PriceNegative);
        }

        // Empty replacement bytes mean "no new image", matching the create
        // contract where only non-empty data reaches the upload port.
        let image_url = match &params.new_image_data {
            Some(bytes) if !bytes.is_empty() => self.image_storage.upload(bytes).await?,
            _ => existing.image_url.clone(),
        };

        let updated = Product::from_repository(
            existing.id,
            params.name.unwrap_or_else(|| existing.name.clone()),
            params
                .description
                .unwrap_or_else(|| existing.description.clone()),
            params.price.unwrap_or(existing.price),
            params.category.unwrap_or_else(|| existing.category.clone()),
            image_url,
            existing.status.clone(),
            existing.created_at,
        );

        // The row can vanish between the read and this write; that race is
        // reported as not-found, a name race as a conflict.
        let persisted = self
            .repository
            .update(&updated)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                RepositoryError::Duplicated => ProductError::NameTaken,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", persisted.id));
        Ok(persisted)
    }
}
