//! In-process image store
//!
//! Keeps uploaded images in a map keyed by public id and hands out URLs
//! under a configurable base. Nothing is served from those URLs; the store
//! exists so the API behaves end to end without an image host.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::UploadedImage;

#[derive(Clone, Debug)]
pub struct MemoryImageStore {
    base_url: String,
    images: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryImageStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            images: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn upload(&self, image: &str) -> UploadedImage {
        let public_id = Uuid::new_v4().simple().to_string();
        let secure_url = format!("{}/{}.img", self.base_url, public_id);

        self.images
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(public_id.clone(), image.to_string());

        UploadedImage {
            secure_url,
            public_id,
        }
    }

    /// Removing an unknown id is not an error, matching the hosted API
    pub fn destroy(&self, public_id: &str) {
        self.images
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(public_id);
    }

    pub fn contains(&self, public_id: &str) -> bool {
        self.images
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(public_id)
    }

    pub fn len(&self) -> usize {
        self.images.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
