//! Text Generator Port
//!
//! Abstract interface for the pretrained text-generation capability.
//! One instance is built at startup and shared read-only by every request.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Prefix marking a generator output as a failure rather than usable text
pub const ERROR_SENTINEL: &str = "Error:";

/// Text generation interface
///
/// # Example
///
/// ```rust,ignore
/// use recipegen::TextGenerator;
///
/// struct Gpt2 { /* ... */ }
///
/// #[async_trait]
/// impl TextGenerator for Gpt2 {
///     async fn generate(&self, instruction: &str, max_length: u32)
///         -> Result<String, DomainError> {
///         // Run the model
///     }
///     fn model_id(&self) -> &str { "gpt2" }
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for an instruction, bounded by `max_length`.
    ///
    /// Failures may be reported as `Err` or as output starting with
    /// [`ERROR_SENTINEL`].
    async fn generate(&self, instruction: &str, max_length: u32) -> Result<String, DomainError>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

/// Whether a generator output signals failure
pub fn is_error_output(output: &str) -> bool {
    output.starts_with(ERROR_SENTINEL)
}
