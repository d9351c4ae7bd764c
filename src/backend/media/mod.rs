//! Image Store
//!
//! Post images are not kept in the database. They are uploaded to an image
//! host, and only the resulting URL is stored on the post. When a post is
//! deleted, the image is removed from the host using the public id
//! recovered from that URL.
//!
//! # Backends
//!
//! - **`Cloudinary`** - Cloudinary upload and admin APIs over `reqwest`
//! - **`Memory`** - in-process store for local development and tests
//! - **`Disabled`** - uploads are refused with 503, removals are no-ops

/// Cloudinary HTTP client
pub mod cloudinary;

/// In-process image store
pub mod memory;

use thiserror::Error;

pub use cloudinary::{CloudinaryClient, CloudinaryConfig};
pub use memory::MemoryImageStore;

/// Errors returned by the image store
#[derive(Debug, Error)]
pub enum ImageStoreError {
    /// No image backend is configured
    #[error("Image uploads are not configured")]
    Disabled,

    /// The HTTP request to the image host failed
    #[error("Image host request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The image host answered with a non-success status
    #[error("Image host rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Public HTTPS URL to store on the post
    pub secure_url: String,
    /// Identifier used to remove the image again
    pub public_id: String,
}

/// The configured image backend
#[derive(Clone, Debug)]
pub enum ImageStore {
    Cloudinary(CloudinaryClient),
    Memory(MemoryImageStore),
    Disabled,
}

impl ImageStore {
    /// Upload an image (data URI or remote URL)
    pub async fn upload(&self, image: &str) -> Result<UploadedImage, ImageStoreError> {
        match self {
            Self::Cloudinary(client) => client.upload(image).await,
            Self::Memory(store) => Ok(store.upload(image)),
            Self::Disabled => Err(ImageStoreError::Disabled),
        }
    }

    /// Remove a previously uploaded image
    pub async fn destroy(&self, public_id: &str) -> Result<(), ImageStoreError> {
        match self {
            Self::Cloudinary(client) => client.destroy(public_id).await,
            Self::Memory(store) => {
                store.destroy(public_id);
                Ok(())
            }
            Self::Disabled => Ok(()),
        }
    }

    /// Short backend name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cloudinary(_) => "cloudinary",
            Self::Memory(_) => "memory",
            Self::Disabled => "disabled",
        }
    }
}

/// Recover the public id from a stored image URL
///
/// The id is the last path segment up to its first `.`, so
/// `https://res.cloudinary.com/demo/image/upload/v1/abc123.jpg` yields
/// `abc123`.
pub fn public_id_from_url(url: &str) -> Option<&str> {
    let last = url.rsplit('/').next()?;
    let id = last.split('.').next()?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_public_id_from_cloudinary_url() {
        assert_eq!(
            public_id_from_url("https://res.cloudinary.com/demo/image/upload/v1712/abc123.jpg"),
            Some("abc123")
        );
    }

    #[test]
    fn test_public_id_without_extension() {
        assert_eq!(public_id_from_url("https://img.example/abc"), Some("abc"));
    }

    #[test]
    fn test_public_id_rejects_empty_segment() {
        assert_eq!(public_id_from_url("https://img.example/"), None);
        assert_eq!(public_id_from_url("https://img.example/.png"), None);
    }

    #[test]
    fn test_disabled_store_refuses_uploads() {
        let store = ImageStore::Disabled;
        assert!(matches!(
            tokio_test::block_on(store.upload("data:image/png;base64,AAAA")),
            Err(ImageStoreError::Disabled)
        ));
        assert!(tokio_test::block_on(store.destroy("abc")).is_ok());
    }

    proptest! {
        #[test]
        fn test_public_id_never_contains_separators(url in "[a-z:/.]{0,40}") {
            if let Some(id) = public_id_from_url(&url) {
                prop_assert!(!id.is_empty());
                prop_assert!(!id.contains('/'));
                prop_assert!(!id.contains('.'));
            }
        }
    }
}
