//! Recipe - Generated recipe DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use recipegen::Recipe;

// ============================================
// Request DTOs (documentation only)
// ============================================
//
// Bodies are parsed by `recipegen::PromptBatch`, which also accepts a bare
// array of prompt pairs.

/// One prompt pair
#[derive(Debug, Deserialize, ToSchema)]
pub struct PromptPairRequest {
    /// Recipe subject, e.g. "banana bread"
    pub prompt_1: String,
    /// Quantity or servings, e.g. "2 loaves"
    pub prompt_2: String,
}

/// Batch of prompt pairs
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateTextRequest {
    pub prompts: Vec<PromptPairRequest>,
}

// ============================================
// Response DTOs
// ============================================

/// Summary of one generated recipe
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    pub id: i64,
    pub prompt_1: String,
    pub prompt_2: String,
    #[serde(rename = "gpt2_response")]
    pub generated_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            prompt_1: recipe.prompt_1,
            prompt_2: recipe.prompt_2,
            generated_text: recipe.generated_text,
            created_at: recipe.created_at,
        }
    }
}

/// Successful batch response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateTextResponse {
    pub message: String,
    pub response: Vec<RecipeSummary>,
}
