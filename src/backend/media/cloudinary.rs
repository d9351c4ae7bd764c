/**
 * Cloudinary Client
 *
 * Uploads go through an unsigned upload preset:
 *
 * ```http
 * POST {api_base}/v1_1/{cloud_name}/image/upload
 * Content-Type: application/x-www-form-urlencoded
 *
 * file=<data uri or url>&upload_preset=<preset>
 * ```
 *
 * Removal uses the Admin API with HTTP basic auth:
 *
 * ```http
 * DELETE {api_base}/v1_1/{cloud_name}/resources/image/upload?public_ids[]=<id>
 * Authorization: Basic base64(api_key:api_secret)
 * ```
 */

use std::sync::Arc;

use serde::Deserialize;

use super::{ImageStoreError, UploadedImage};

/// Default Cloudinary API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Cloudinary account settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub upload_preset: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Clone, Debug)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    config: Arc<CloudinaryConfig>,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/v1_1/{}/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.cloud_name,
            path
        )
    }

    pub async fn upload(&self, file: &str) -> Result<UploadedImage, ImageStoreError> {
        let response = self
            .http
            .post(self.endpoint("image/upload"))
            .form(&[
                ("file", file),
                ("upload_preset", self.config.upload_preset.as_str()),
            ])
            .send()
            .await?;

        let body: UploadResponse = ensure_success(response).await?.json().await?;
        tracing::debug!("Uploaded image {}", body.public_id);

        Ok(UploadedImage {
            secure_url: body.secure_url,
            public_id: body.public_id,
        })
    }

    pub async fn destroy(&self, public_id: &str) -> Result<(), ImageStoreError> {
        let response = self
            .http
            .delete(self.endpoint("resources/image/upload"))
            .query(&[("public_ids[]", public_id)])
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .send()
            .await?;

        ensure_success(response).await?;
        tracing::debug!("Removed image {}", public_id);
        Ok(())
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ImageStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ImageStoreError::Rejected {
        status: status.as_u16(),
        message,
    })
}
