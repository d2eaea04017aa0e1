//! PromptPair - Recipe subject and quantity

use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::PromptValidationError;

/// A trimmed, non-empty `(prompt_1, prompt_2)` pair.
///
/// `prompt_1` names the dish, `prompt_2` the quantity or servings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPair {
    prompt_1: String,
    prompt_2: String,
}

impl PromptPair {
    /// Trim both prompts; fails if either ends up empty.
    pub fn new(
        prompt_1: impl AsRef<str>,
        prompt_2: impl AsRef<str>,
    ) -> Result<Self, PromptValidationError> {
        let prompt_1 = prompt_1.as_ref().trim();
        let prompt_2 = prompt_2.as_ref().trim();

        if prompt_1.is_empty() || prompt_2.is_empty() {
            return Err(PromptValidationError::EmptyPrompt);
        }

        Ok(Self {
            prompt_1: prompt_1.to_string(),
            prompt_2: prompt_2.to_string(),
        })
    }

    /// Build from raw JSON values. Anything other than a string counts as empty.
    pub fn from_values(prompt_1: &Value, prompt_2: &Value) -> Result<Self, PromptValidationError> {
        match (prompt_1.as_str(), prompt_2.as_str()) {
            (Some(p1), Some(p2)) => Self::new(p1, p2),
            _ => Err(PromptValidationError::EmptyPrompt),
        }
    }

    pub fn prompt_1(&self) -> &str {
        &self.prompt_1
    }

    pub fn prompt_2(&self) -> &str {
        &self.prompt_2
    }

    /// Instruction sent to the text generator
    pub fn instruction(&self) -> String {
        format!(
            "Write a detailed recipe for {} for a quantity of {}.",
            self.prompt_1, self.prompt_2
        )
    }
}
