//! Value Objects
//!
//! Validated, immutable inputs.

mod prompt_batch;
mod prompt_pair;

pub use prompt_batch::*;
pub use prompt_pair::*;
