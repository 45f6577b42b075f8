use crate::domain::model::Recipe;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the non-deterministic picks (emoji, title adjective, random
/// recipe type). Implementations must return an index below `len`.
pub trait RandomSource: Send + Sync {
    fn pick_index(&self, len: usize) -> usize;
}

/// Picks one entry of `items`. `items` must be non-empty.
pub fn choose<'a, R: RandomSource + ?Sized>(random: &R, items: &[&'a str]) -> &'a str {
    let idx = random.pick_index(items.len());
    items[idx.min(items.len() - 1)]
}

#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Recipe>;
}
