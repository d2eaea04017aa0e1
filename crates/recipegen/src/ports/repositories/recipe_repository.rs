//! Recipe Repository Port
//!
//! Abstract interface for Recipe persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewRecipe, Recipe};

/// Repository interface for Recipe records
///
/// Records are append-only: there is no update or delete.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Persist a new Recipe, returning it with its assigned id and timestamp
    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, DomainError>;
}
