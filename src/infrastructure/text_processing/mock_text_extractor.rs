use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{ExtractorError, TextExtractor};
use crate::domain::FileRecord;

/// Scripted extractor for tests: returns the queued results in order,
/// then empty strings, and counts its invocations.
pub struct MockTextExtractor {
    script: Mutex<VecDeque<Result<String, ExtractorError>>>,
    calls: AtomicUsize,
}

impl MockTextExtractor {
    pub fn new(script: Vec<Result<String, ExtractorError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract(&self, _record: &FileRecord) -> Result<String, ExtractorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .expect("mock script lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}
