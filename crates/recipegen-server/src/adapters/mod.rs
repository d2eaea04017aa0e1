//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod postgres;
pub mod text_generation;

// Re-exports
pub use postgres::PgRecipeRepository;
pub use text_generation::HttpTextGenerator;
