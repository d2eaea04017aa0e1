//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod recipe_service;

pub use recipe_service::RecipeService;

#[cfg(test)]
pub(crate) use recipe_service::testing;
