use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageStorageService;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_storage: Arc<dyn ImageStorageService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        // Field checks run before any port call so that a bad request can
        // never leave an orphaned upload behind.
        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if params.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if params.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }
        if params.price < 0.0 {
            return Err(ProductError::PriceNegative);
        }

        // Uniqueness ignores status: a soft-deleted product still blocks the
        // name. The storage constraint remains the backstop for races.
        if self.repository.find_by_name(&params.name).await?.is_some() {
            return Err(ProductError::NameTaken);
        }

        if params.image_data.is_empty() {
            return Err(ProductError::ImageRequired);
        }

        let image_url = self.image_storage.upload(&params.image_data).await?;

        let product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            image_url,
        })?;

        // If this insert fails the uploaded image is not cleaned up; the
        // orphaned asset is an accepted cost of the two-phase sequence.
        self.repository.insert(&product).await.map_err(|e| match e {
            RepositoryError::Duplicated => ProductError::NameTaken,
            other => ProductError::Repository(other),
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::services::ImageStorageError;
    use crate::domain::product::value_objects::ProductStatus;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn soft_delete(&self, id: Uuid) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub ImageStorage {}

        #[async_trait]
        impl ImageStorageService for ImageStorage {
            async fn upload(&self, image: &[u8]) -> Result<String, ImageStorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing_product(name: &str) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            "Some description".to_string(),
            4.5,
            "beverages".to_string(),
            "https://res.example.com/products/existing.jpg".to_string(),
            ProductStatus::Active,
            Utc::now(),
        )
    }

    fn valid_params() -> CreateProductParams {
        CreateProductParams {
            name: "Widget".to_string(),
            description: "A very useful widget".to_string(),
            price: 9.99,
            category: "tools".to_string(),
            image_data: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[tokio::test]
    async fn should_create_product_when_name_is_unique() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_storage = MockImageStorage::new();

        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo.expect_insert().returning(|_| Ok(()));
        mock_storage
            .expect_upload()
            .returning(|_| Ok("https://res.example.com/products/widget.jpg".to_string()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let product = use_case.execute(valid_params()).await.unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(
            product.image_url,
            "https://res.example.com/products/widget.jpg"
        );
    }

    #[tokio::test]
    async fn should_reject_create_when_name_already_exists() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_storage = MockImageStorage::new();

        mock_repo
            .expect_find_by_name()
            .returning(|_| Ok(Some(existing_product("Widget"))));
        mock_repo.expect_insert().never();
        mock_storage.expect_upload().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameTaken));
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_held_by_inactive_product() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_storage = MockImageStorage::new();

        // Soft-deleted products still block name reuse.
        mock_repo.expect_find_by_name().returning(|_| {
            let mut product = existing_product("Widget");
            product.status = ProductStatus::Inactive;
            Ok(Some(product))
        });
        mock_storage.expect_upload().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameTaken));
    }

    #[tokio::test]
    async fn should_reject_create_when_image_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_storage = MockImageStorage::new();

        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo.expect_insert().never();
        mock_storage.expect_upload().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let mut params = valid_params();
        params.image_data = vec![];
        let result = use_case.execute(params).await;

        assert!(matches!(result.unwrap_err(), ProductError::ImageRequired));
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_storage = MockImageStorage::new();

        mock_repo.expect_find_by_name().never();
        mock_storage.expect_upload().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let mut params = valid_params();
        params.name = "  ".to_string();
        let result = use_case.execute(params).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_create_when_price_is_negative() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_storage = MockImageStorage::new();

        mock_repo.expect_find_by_name().never();
        mock_storage.expect_upload().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let mut params = valid_params();
        params.price = -1.0;
        let result = use_case.execute(params).await;

        assert!(matches!(result.unwrap_err(), ProductError::PriceNegative));
    }

    #[tokio::test]
    async fn should_not_insert_when_upload_fails() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_storage = MockImageStorage::new();

        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo.expect_insert().never();
        mock_storage
            .expect_upload()
            .returning(|_| Err(ImageStorageError("provider unavailable".to_string())));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        match result.unwrap_err() {
            ProductError::Upload(err) => assert_eq!(err.0, "provider unavailable"),
            other => panic!("expected upload error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_report_conflict_when_insert_hits_unique_constraint() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_storage = MockImageStorage::new();

        // Pre-check passed but a concurrent create won the insert race.
        mock_repo.expect_find_by_name().returning(|_| Ok(None));
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Duplicated));
        mock_storage
            .expect_upload()
            .returning(|_| Ok("https://res.example.com/products/widget.jpg".to_string()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let result = use_case.execute(valid_params()).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameTaken));
    }
}
