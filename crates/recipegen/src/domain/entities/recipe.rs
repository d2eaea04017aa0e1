//! Recipe - Generated Recipe Record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PromptPair;

/// Recipe - a persisted generation result.
///
/// Records are never updated in place: every request creates new rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub prompt_1: String,
    pub prompt_2: String,
    pub generated_text: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a Recipe; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub prompts: PromptPair,
    pub generated_text: String,
}

impl NewRecipe {
    pub fn new(prompts: PromptPair, generated_text: impl Into<String>) -> Self {
        Self {
            prompts,
            generated_text: generated_text.into(),
        }
    }

    pub fn prompt_1(&self) -> &str {
        self.prompts.prompt_1()
    }

    pub fn prompt_2(&self) -> &str {
        self.prompts.prompt_2()
    }
}
