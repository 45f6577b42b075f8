pub mod assembler;
pub mod classifier;
pub mod composer;
pub mod export;
pub mod favorites;
pub mod synthesizer;
pub mod templates;

pub use crate::domain::model::{Analysis, Recipe};
pub use crate::domain::ports::{RandomSource, RecipeGenerator};
pub use crate::utils::error::Result;
