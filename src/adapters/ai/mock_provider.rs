//! Mock completion provider for tests and provider-less runs.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{
    CompletionError, CompletionProvider, CompletionRequest, CompletionResponse,
};

/// Scripted provider: replies with a fixed string or fails every call,
/// recording the last request it saw for assertions.
pub struct MockProvider {
    reply: Option<String>,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockProvider {
    /// Provider that answers every completion with `content`.
    pub fn replying(content: impl Into<String>) -> Self {
        Self {
            reply: Some(content.into()),
            last_request: Mutex::new(None),
        }
    }

    /// Provider whose every completion fails.
    pub fn failing() -> Self {
        Self {
            reply: None,
            last_request: Mutex::new(None),
        }
    }

    /// The most recent request passed to [`CompletionProvider::complete`].
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, CompletionError> {
        let model = request.model.clone();
        *self.last_request.lock().unwrap() = Some(request);

        match &self.reply {
            Some(content) => Ok(CompletionResponse {
                content: content.clone(),
                model,
            }),
            None => Err(CompletionError::unavailable("mock provider set to fail")),
        }
    }
}
