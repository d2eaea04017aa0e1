//! Domain Entities

mod recipe;

pub use recipe::*;
