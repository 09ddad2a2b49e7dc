use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{VisionClient, VisionClientError};

enum Behavior {
    Text(String),
    Unavailable(String),
}

/// Test double for the vision service: fixed reply, call counting.
pub struct MockVisionClient {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockVisionClient {
    pub fn returning(text: &str) -> Self {
        Self {
            behavior: Behavior::Text(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            behavior: Behavior::Unavailable(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionClient for MockVisionClient {
    async fn recognize_text(&self, _image: &[u8], _mime: &str) -> Result<String, VisionClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Text(text) => Ok(text.clone()),
            Behavior::Unavailable(message) => {
                Err(VisionClientError::ServiceUnavailable(message.clone()))
            }
        }
    }
}
