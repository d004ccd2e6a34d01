use reqwest::Client;

/// Shared Cloudinary HTTP client configuration.
pub struct CloudinaryClient {
    pub client: Client,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

impl CloudinaryClient {
    /// Fails if the underlying HTTP client cannot be built; falling back to a
    /// default client would silently lose the request timeout.
    pub fn new(
        cloud_name: String,
        api_key: String,
        api_secret: String,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            cloud_name,
            api_key,
            api_secret,
            base_url: "https://api.cloudinary.com/v1_1".to_string(),
        })
    }

    /// Returns the image upload endpoint URL for the configured cloud.
    pub fn image_upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.base_url, self.cloud_name)
    }
}
