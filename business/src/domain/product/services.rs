use async_trait::async_trait;

/// Opaque failure from the image storage provider. The message is preserved
/// verbatim for diagnostics.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ImageStorageError(pub String);

/// Service port for storing product images with an external provider.
///
/// A single upload attempt per call; the caller decides what a failure means.
/// The target folder/namespace is configuration of the adapter, not a
/// per-call argument.
#[async_trait]
pub trait ImageStorageService: Send + Sync {
    /// Uploads raw image bytes and returns a publicly resolvable URL.
    async fn upload(&self, image: &[u8]) -> Result<String, ImageStorageError>;
}
