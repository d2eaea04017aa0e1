//! PostgreSQL implementation of RecipeRepository

use async_trait::async_trait;
use sqlx::PgPool;

use recipegen::{DomainError, NewRecipe, Recipe, RecipeRepository};

/// PostgreSQL implementation of RecipeRepository
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: i64,
    prompt_1: String,
    prompt_2: String,
    generated_text: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            prompt_1: row.prompt_1,
            prompt_2: row.prompt_2,
            generated_text: row.generated_text,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, DomainError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            INSERT INTO recipes (prompt_1, prompt_2, generated_text)
            VALUES ($1, $2, $3)
            RETURNING id, prompt_1, prompt_2, generated_text, created_at
            "#,
        )
        .bind(recipe.prompt_1())
        .bind(recipe.prompt_2())
        .bind(&recipe.generated_text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }
}
