//! # NeuroSwitch Client
//!
//! An OpenAI-compatible client for the NeuroSwitch LLM routing API.
//!
//! NeuroSwitch takes a single prompt string plus a routing mode and picks the
//! backend model itself. This client accepts chat-style messages, flattens
//! them into that prompt, and reshapes the reply into the familiar
//! `choices[0].message.content` / `usage.total_tokens` envelope, with the
//! NeuroSwitch `cost` carried alongside.
//!
//! ## Quick Start
//!
//! ```no_run
//! use client::Client;
//! use request::{Message, Mode};
//!
//! #[tokio::main]
//! async fn main() -> client::Result<()> {
//!     let client = Client::new("your-api-key");
//!
//!     let response = client
//!         .chat_completions(
//!             "",
//!             &[Message::user("Tell me a Christmas story.")],
//!             Mode::Adaptive,
//!         )
//!         .await?;
//!
//!     println!("Assistant: {}", response.content().unwrap_or_default());
//!     println!("Cost: {}", response.cost);
//!
//!     Ok(())
//! }
//! ```

use request::{Message, Mode, SingleUseLlmRequest};
use response::{ChatCompletionsResponse, SingleUseLlmResponse};
use tracing::{debug, error, info};

pub mod config;
mod error;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{CommunicationError, Error, Result};

pub const SINGLE_USE_LLM_PATH: &str = "single-use-llm";

/// Stateless apart from its configuration; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the default production endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl AsRef<str>) -> Self {
        Self::from_config(ClientConfig::with_base_url(api_key, base_url))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL of the completion endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.config.base_url(), SINGLE_USE_LLM_PATH)
    }

    /// Send one completion request and return it in OpenAI shape.
    ///
    /// An empty `model` lets NeuroSwitch choose. Fails with
    /// [`Error::InvalidArgument`] before touching the network when `messages`
    /// is empty.
    pub async fn chat_completions(
        &self,
        model: &str,
        messages: &[Message],
        mode: impl Into<Mode>,
    ) -> Result<ChatCompletionsResponse> {
        if messages.is_empty() {
            return Err(Error::InvalidArgument(
                "Messages must be a non-empty list.".to_string(),
            ));
        }

        let request = SingleUseLlmRequest::new(model, messages, mode.into());
        let url = self.endpoint();
        debug!(
            "Starting NeuroSwitch request: url={}, mode={}, custom_model={:?}, messages={}",
            url,
            request.mode,
            request.custom_model,
            messages.len()
        );

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .inspect_err(|e| error!("NeuroSwitch request failed: {}", e))?;

        let status = response.status();
        debug!("NeuroSwitch API response status: {}", status);

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    error!("Failed to read NeuroSwitch error body: {}", e);
                    String::new()
                }
            };
            error!("NeuroSwitch API error: {} - {}", status, body);
            return Err(CommunicationError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let bytes = response.bytes().await?;
        let raw: SingleUseLlmResponse = serde_json::from_slice(&bytes)
            .inspect_err(|e| error!("Failed to parse NeuroSwitch response: {}", e))?;
        let completion = ChatCompletionsResponse::try_from(raw)
            .inspect_err(|e| error!("Incomplete NeuroSwitch response: {}", e))?;

        info!(
            "NeuroSwitch completion received: model={}, total_tokens={}, cost={}",
            completion.model,
            completion.total_tokens(),
            completion.cost
        );

        Ok(completion)
    }
}
