//! Response types: the raw NeuroSwitch reply and the OpenAI-compatible
//! envelope it is translated into.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use thiserror::Error;

pub const ASSISTANT_ROLE: &str = "assistant";

/// Body returned by `POST /single-use-llm`.
///
/// Every field is optional here so that absence is reported as a
/// [`MissingField`] during conversion instead of a generic parse failure.
/// Numbers are kept as received, integer or float.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SingleUseLlmResponse {
    pub response: Option<String>,
    pub tokens_used: Option<Number>,
    pub cost: Option<Number>,
    pub model: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("response is missing field `{0}`")]
pub struct MissingField(pub &'static str);

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ChatCompletionsResponse {
    pub choices: Vec<Choice>,
    pub usage: Usage,
    /// Price of the call as reported by NeuroSwitch. Not part of the OpenAI shape.
    pub cost: Number,
    pub model: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AssistantMessage {
    pub role: String,
    pub content: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Usage {
    pub total_tokens: Number,
}

impl ChatCompletionsResponse {
    pub fn builder() -> ChatCompletionsResponseBuilder {
        ChatCompletionsResponseBuilder::default()
    }

    /// Content of the first choice.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }

    pub fn total_tokens(&self) -> &Number {
        &self.usage.total_tokens
    }
}

impl Choice {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            message: AssistantMessage {
                role: ASSISTANT_ROLE.to_string(),
                content: content.into(),
            },
        }
    }
}

pub struct ChatCompletionsResponseBuilder {
    choices: Vec<Choice>,
    total_tokens: Number,
    cost: Number,
    model: String,
}

impl Default for ChatCompletionsResponseBuilder {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
            total_tokens: Number::from(0),
            cost: Number::from(0),
            model: String::new(),
        }
    }
}

impl ChatCompletionsResponseBuilder {
    pub fn choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn total_tokens(mut self, total_tokens: Number) -> Self {
        self.total_tokens = total_tokens;
        self
    }

    pub fn cost(mut self, cost: Number) -> Self {
        self.cost = cost;
        self
    }

    pub fn model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn build(self) -> ChatCompletionsResponse {
        ChatCompletionsResponse {
            choices: self.choices,
            usage: Usage {
                total_tokens: self.total_tokens,
            },
            cost: self.cost,
            model: self.model,
        }
    }
}

impl TryFrom<SingleUseLlmResponse> for ChatCompletionsResponse {
    type Error = MissingField;

    fn try_from(raw: SingleUseLlmResponse) -> Result<Self, Self::Error> {
        let content = raw.response.ok_or(MissingField("response"))?;
        let total_tokens = raw.tokens_used.ok_or(MissingField("tokens_used"))?;
        let cost = raw.cost.ok_or(MissingField("cost"))?;
        let model = raw.model.ok_or(MissingField("model"))?;

        Ok(ChatCompletionsResponse::builder()
            .choice(Choice::assistant(content))
            .total_tokens(total_tokens)
            .cost(cost)
            .model(model)
            .build())
    }
}
