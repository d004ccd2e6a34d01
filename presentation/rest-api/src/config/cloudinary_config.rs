/// Configuration for Cloudinary image storage access.
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub upload_folder: String,
}

impl CloudinaryConfig {
    /// Environment variables:
    /// - CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET (required)
    /// - CLOUDINARY_UPLOAD_FOLDER (default: "products")
    pub fn from_env() -> Self {
        let cloud_name = std::env::var("CLOUDINARY_CLOUD_NAME")
            .expect("CLOUDINARY_CLOUD_NAME environment variable must be set");
        let api_key = std::env::var("CLOUDINARY_API_KEY")
            .expect("CLOUDINARY_API_KEY environment variable must be set");
        let api_secret = std::env::var("CLOUDINARY_API_SECRET")
            .expect("CLOUDINARY_API_SECRET environment variable must be set");
        let upload_folder =
            std::env::var("CLOUDINARY_UPLOAD_FOLDER").unwrap_or_else(|_| "products".to_string());

        Self {
            cloud_name,
            api_key,
            api_secret,
            upload_folder,
        }
    }
}
