//! Recipegen API Routes
//!
//! - /generate-text/ - Batch recipe generation (POST, PUT)

pub mod generate;
pub mod swagger;
