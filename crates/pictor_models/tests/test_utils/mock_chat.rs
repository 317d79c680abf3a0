//! Mock chat completion backend for testing.

use async_trait::async_trait;
use pictor_error::{RequestError, RequestErrorKind};
use pictor_models::{ChatCompletion, ChatCompletionRequest, ChatCompletionResponse};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return this response
    Respond(ChatCompletionResponse),
    /// Always fail with this error kind
    Error(RequestErrorKind),
}

/// Mock chat completion client.
///
/// Records every request it receives so tests can inspect the wire shape
/// without making real API calls.
#[derive(Clone)]
pub struct MockChatClient {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockChatClient {
    /// Create a mock that always answers with `response`.
    pub fn new_response(response: ChatCompletionResponse) -> Self {
        Self {
            behavior: MockBehavior::Respond(response),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always fails with `kind`.
    pub fn new_error(kind: RequestErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Error(kind),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for MockChatClient {
    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, RequestError> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.behavior {
            MockBehavior::Respond(response) => Ok(response.clone()),
            MockBehavior::Error(kind) => Err(RequestError::new(kind.clone())),
        }
    }
}
