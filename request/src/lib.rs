//! Outgoing payload for the NeuroSwitch `single-use-llm` endpoint.
//!
//! The endpoint takes one prompt string rather than structured turns, so chat
//! messages are flattened into `"{role}: {content}"` lines before sending.

use serde::{Deserialize, Serialize};

mod message;
mod mode;

pub use message::Message;
pub use mode::Mode;

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct SingleUseLlmRequest {
    pub prompt: String,
    pub mode: Mode,
    pub custom_model: String,
}

impl SingleUseLlmRequest {
    pub fn new(model: impl Into<String>, messages: &[Message], mode: Mode) -> Self {
        Self {
            prompt: flatten_prompt(messages),
            mode,
            custom_model: model.into(),
        }
    }
}

/// Joins messages into a single prompt, one `"{role}: {content}"` line per
/// message in input order.
pub fn flatten_prompt(messages: &[Message]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
