//! Recipegen API Models
//!
//! - Recipe: request and response bodies for `/generate-text/`
//! - Error: JSON error envelope

mod error;
mod recipe;

pub use error::*;
pub use recipe::*;
