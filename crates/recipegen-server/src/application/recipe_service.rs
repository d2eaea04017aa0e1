//! Recipe Application Service (Use Case)
//!
//! Turns a validated prompt batch into generated, persisted recipes.

use std::sync::Arc;

use recipegen::ports::is_error_output;
use recipegen::{DomainError, NewRecipe, PromptBatch, Recipe, RecipeRepository, TextGenerator};

/// Application service for recipe generation
pub struct RecipeService {
    repo: Arc<dyn RecipeRepository>,
    generator: Arc<dyn TextGenerator>,
    max_length: u32,
}

impl RecipeService {
    pub fn new(
        repo: Arc<dyn RecipeRepository>,
        generator: Arc<dyn TextGenerator>,
        max_length: u32,
    ) -> Self {
        Self {
            repo,
            generator,
            max_length,
        }
    }

    /// Generate and store one recipe per prompt pair, in input order.
    ///
    /// Stops at the first failing pair. Recipes stored for earlier pairs
    /// are kept.
    pub async fn generate_batch(&self, batch: PromptBatch) -> Result<Vec<Recipe>, DomainError> {
        let total = batch.len();
        let mut recipes = Vec::with_capacity(total);

        for (index, raw) in batch.into_iter().enumerate() {
            let prompts = raw.validate().inspect_err(|e| {
                tracing::warn!("Rejected prompt pair {}/{}: {}", index + 1, total, e);
            })?;

            let instruction = prompts.instruction();
            let output = match self.generator.generate(&instruction, self.max_length).await {
                Ok(text) => text.trim().to_string(),
                Err(e) => format!("Error: {e}"),
            };

            if is_error_output(&output) {
                tracing::error!(
                    "Generation failed for pair {}/{} ({}): {}",
                    index + 1,
                    total,
                    self.generator.model_id(),
                    output
                );
                return Err(DomainError::Generation(output));
            }

            let recipe = self
                .repo
                .create(&NewRecipe::new(prompts, output))
                .await?;

            tracing::info!(
                "Created Recipe {}: {} | {}",
                recipe.id,
                recipe.prompt_1,
                recipe.prompt_2
            );
            recipes.push(recipe);
        }

        Ok(recipes)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory doubles shared by service and route tests

    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryRecipeRepository {
        recipes: Mutex<Vec<Recipe>>,
        fail: bool,
    }

    impl InMemoryRecipeRepository {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn all(&self) -> Vec<Recipe> {
            self.recipes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecipeRepository for InMemoryRecipeRepository {
        async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, DomainError> {
            if self.fail {
                return Err(DomainError::Repository("connection refused".to_string()));
            }
            let mut recipes = self.recipes.lock().unwrap();
            let stored = Recipe {
                id: recipes.len() as i64 + 1,
                prompt_1: recipe.prompt_1().to_string(),
                prompt_2: recipe.prompt_2().to_string(),
                generated_text: recipe.generated_text.clone(),
                created_at: Utc::now(),
            };
            recipes.push(stored.clone());
            Ok(stored)
        }
    }

    /// Replays scripted outputs, then echoes the instruction
    #[derive(Default)]
    pub struct ScriptedGenerator {
        script: Mutex<VecDeque<Result<String, DomainError>>>,
        calls: Mutex<Vec<(String, u32)>>,
    }

    impl ScriptedGenerator {
        pub fn with_script(script: Vec<Result<String, DomainError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                calls: Mutex::default(),
            }
        }

        pub fn calls(&self) -> Vec<(String, u32)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            instruction: &str,
            max_length: u32,
        ) -> Result<String, DomainError> {
            self.calls
                .lock()
                .unwrap()
                .push((instruction.to_string(), max_length));
            match self.script.lock().unwrap().pop_front() {
                Some(next) => next,
                None => Ok(format!("{instruction} Step 1: cook.")),
            }
        }

        fn model_id(&self) -> &str {
            "scripted"
        }
    }
}
