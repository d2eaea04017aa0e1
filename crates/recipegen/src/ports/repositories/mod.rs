//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod recipe_repository;

pub use recipe_repository::*;
