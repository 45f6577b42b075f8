pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::client::RecipeClient;
pub use crate::adapters::random::{ConfiguredRandom, SeededRandom, ThreadRandom};
pub use crate::config::AppConfig;
pub use crate::core::synthesizer::RecipeSynthesizer;
pub use crate::domain::model::{Recipe, RecipeCategory};
pub use crate::domain::ports::{RandomSource, RecipeGenerator};
pub use crate::utils::error::{RecipeError, Result};
