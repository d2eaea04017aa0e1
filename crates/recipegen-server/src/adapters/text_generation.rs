//! HTTP Text Generation
//!
//! Calls a Hugging Face compatible text-generation endpoint using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use recipegen::{DomainError, TextGenerator};

use crate::config::GenerationConfig;

#[derive(Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Inference API answers with a list, a single object, or an error object
#[derive(Deserialize)]
#[serde(untagged)]
enum GenerationOutput {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
    Failure { error: String },
}

impl GenerationOutput {
    fn into_text(self) -> Result<String, DomainError> {
        match self {
            Self::Batch(items) => items
                .into_iter()
                .next()
                .map(|g| g.generated_text.trim().to_string())
                .ok_or_else(|| DomainError::ExternalService("No text generated".to_string())),
            Self::Single(g) => Ok(g.generated_text.trim().to_string()),
            Self::Failure { error } => Err(DomainError::ExternalService(error)),
        }
    }
}

/// HTTP implementation of TextGenerator
pub struct HttpTextGenerator {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
    model: String,
}

impl HttpTextGenerator {
    pub fn new(config: &GenerationConfig) -> Result<Self, DomainError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            DomainError::ExternalService(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, instruction: &str, max_length: u32) -> Result<String, DomainError> {
        let request = GenerationRequest {
            inputs: instruction,
            parameters: GenerationParameters {
                max_new_tokens: max_length,
                return_full_text: true,
            },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Text generation endpoint returned {}: {}", status, body);
            return Err(DomainError::ExternalService(format!(
                "{} returned {}: {}",
                self.model, status, body
            )));
        }

        let output: GenerationOutput = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Invalid response: {e}")))?;

        output.into_text()
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
