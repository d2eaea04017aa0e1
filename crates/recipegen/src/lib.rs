//! Recipegen Domain Library
//!
//! Core domain types and interfaces for the recipe generation service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Persisted records (Recipe)
//!   - `value_objects/`: Validated inputs (PromptPair, PromptBatch)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use recipegen::{PromptBatch, RecipeRepository, TextGenerator};
//!
//! let batch = PromptBatch::from_slice(body)?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, NewRecipe, PromptBatch, PromptPair, PromptValidationError, RawPromptPair, Recipe,
    RequestBody,
};
pub use ports::{RecipeRepository, TextGenerator};
