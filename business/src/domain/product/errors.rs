use super::services::ImageStorageError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.image_required")]
    ImageRequired,
    #[error("product.name_taken")]
    NameTaken,
    #[error("product.not_found")]
    NotFound,
    #[error("product.image_upload_failed: {0}")]
    Upload(#[from] ImageStorageError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
