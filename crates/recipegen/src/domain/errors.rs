//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Rejections of an inbound prompt batch.
///
/// The `Display` text is returned verbatim to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptValidationError {
    #[error("Malformed JSON body: {0}")]
    MalformedJson(String),

    #[error("Invalid request format. Expected JSON object or array.")]
    InvalidFormat,

    #[error("The 'prompts' field must be a list.")]
    PromptsNotList,

    #[error("Each item in the 'prompts' list must be a dictionary.")]
    ItemNotObject,

    #[error("Each dictionary must contain 'prompt_1' and 'prompt_2' keys.")]
    MissingKeys,

    #[error("Both 'prompt_1' and 'prompt_2' must be non-empty strings.")]
    EmptyPrompt,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    InvalidPrompt(#[from] PromptValidationError),

    #[error("Text generation encountered an error: {0}")]
    Generation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}
