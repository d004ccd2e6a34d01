use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty".to_string(),
            ),
            ProductError::DescriptionEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.description_empty".to_string(),
            ),
            ProductError::CategoryEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.category_empty".to_string(),
            ),
            ProductError::PriceNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_negative".to_string(),
            ),
            ProductError::ImageRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.image_required".to_string(),
            ),
            ProductError::NameTaken => (
                StatusCode::CONFLICT,
                "ConflictError",
                "product.name_taken".to_string(),
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "product.not_found".to_string(),
            ),
            // Preserve the provider's message for diagnostics.
            ProductError::Upload(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                self.to_string(),
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
