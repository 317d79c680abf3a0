//! Test utilities for Pictor model tests.
//!
//! This module provides a mock chat completion backend and response helpers.

pub mod mock_chat;

pub use mock_chat::MockChatClient;

use pictor_models::{ChatCompletionResponse, Choice, ChoiceMessage};

/// Helper to create a single-choice response.
#[allow(dead_code)]
pub fn response_with_content(content: Option<&str>) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "chatcmpl-test".to_string(),
        model: "mock-vision".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChoiceMessage {
                role: "assistant".to_string(),
                content: content.map(str::to_string),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}
