use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};

use business::domain::product::services::{ImageStorageError, ImageStorageService};

use crate::client::CloudinaryClient;

/// Cloudinary-backed implementation of the image storage port.
///
/// Performs a signed multipart upload and returns the `secure_url` of the
/// stored asset. One attempt per call; the caller owns retry policy.
pub struct ImageStorageCloudinary {
    client: CloudinaryClient,
    folder: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl ImageStorageCloudinary {
    pub fn new(client: CloudinaryClient, folder: String) -> Self {
        Self { client, folder }
    }

    /// Cloudinary request signature: SHA-1 over the sorted parameter string
    /// with the API secret appended, hex-encoded.
    fn sign(folder: &str, timestamp: i64, api_secret: &str) -> String {
        let to_sign = format!("folder={}&timestamp={}{}", folder, timestamp, api_secret);
        let digest = Sha1::digest(to_sign.as_bytes());
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[async_trait]
impl ImageStorageService for ImageStorageCloudinary {
    async fn upload(&self, image: &[u8]) -> Result<String, ImageStorageError> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = Self::sign(&self.folder, timestamp, &self.client.api_secret);

        let form = Form::new()
            .text("api_key", self.client.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", self.folder.clone())
            .text("signature", signature)
            .part("file", Part::bytes(image.to_vec()).file_name("image"));

        let response = self
            .client
            .client
            .post(self.client.image_upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ImageStorageError(format!("cloudinary request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ImageStorageError(format!(
                "cloudinary upload rejected ({}): {}",
                status, body
            )));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageStorageError(format!("cloudinary response malformed: {}", e)))?;

        Ok(parsed.secure_url)
    }
}
