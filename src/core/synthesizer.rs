use crate::adapters::random::ThreadRandom;
use crate::core::{assembler, classifier};
use crate::domain::model::Recipe;
use crate::domain::ports::{RandomSource, RecipeGenerator};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct RecipeSynthesizer<R: RandomSource = ThreadRandom> {
    random: R,
}

impl RecipeSynthesizer<ThreadRandom> {
    pub fn with_thread_random() -> Self {
        Self::new(ThreadRandom)
    }
}

impl<R: RandomSource> RecipeSynthesizer<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    pub fn synthesize(&self, prompt: &str) -> Recipe {
        let analysis = classifier::analyze(prompt);
        tracing::debug!(
            recipe_type = analysis.recipe_type().unwrap_or("generic"),
            cuisine = %analysis.cuisine,
            difficulty = %analysis.difficulty,
            method = %analysis.method,
            cooking_time = %analysis.cooking_time,
            "Analyzed prompt"
        );

        Recipe {
            title: assembler::title(&analysis, &self.random),
            cuisine: analysis.cuisine,
            difficulty: analysis.difficulty,
            method: analysis.method,
            cooking_time: analysis.cooking_time.clone(),
            servings: analysis.servings.clone(),
            dietary_info: analysis.dietary_info.clone(),
            ingredients: assembler::ingredients(&analysis),
            steps: assembler::steps(&analysis),
            tips: assembler::tips(&analysis),
        }
    }
}

#[async_trait]
impl<R: RandomSource> RecipeGenerator for RecipeSynthesizer<R> {
    async fn generate(&self, prompt: &str) -> Result<Recipe> {
        Ok(self.synthesize(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::SeededRandom;
    use crate::domain::model::{CookingMethod, Cuisine, Difficulty};

    #[test]
    fn test_instant_noodle_upgrade_end_to_end() {
        let synth = RecipeSynthesizer::new(SeededRandom::new(1));
        let recipe = synth.synthesize(
            "Give me a quick, easy, and delicious recipe for instant noodle upgrade.",
        );

        assert_eq!(recipe.difficulty, Difficulty::Beginner);
        assert_eq!(recipe.method, CookingMethod::Boiling);
        assert_eq!(recipe.cooking_time, "5-8 minutes");
        assert_eq!(recipe.ingredients[0], "1 packet instant noodles (any flavor)");
        assert!(recipe.title.ends_with(" Instant noodle upgrade"));
        assert_eq!(recipe.servings, "4 servings");
    }

    #[test]
    fn test_unrecognised_prompt_gets_generic_recipe() {
        let synth = RecipeSynthesizer::with_thread_random();
        let recipe = synth.synthesize("");

        assert_eq!(recipe.cuisine, Cuisine::International);
        assert_eq!(recipe.difficulty, Difficulty::Intermediate);
        assert_eq!(recipe.method, CookingMethod::Saute);
        assert_eq!(recipe.cooking_time, "25-35 minutes");
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.steps.is_empty());
        assert!(recipe.title.contains("Surprise"));
    }

    #[test]
    fn test_tips_never_exceed_three() {
        let synth = RecipeSynthesizer::new(SeededRandom::new(3));
        let prompts = [
            "quick asian stir fry with chicken",
            "easy italian bake",
            "advanced french roast",
            "healthy smoothie bowl",
            "vegetarian pasta",
            "steam some fish",
            "💥 ünïcödé ✨ 10000000000000 minutes",
        ];
        for prompt in prompts {
            let recipe = synth.synthesize(prompt);
            assert!(recipe.tips.len() <= 3, "{}", prompt);
            assert!(!recipe.ingredients.is_empty(), "{}", prompt);
            assert!(!recipe.steps.is_empty(), "{}", prompt);
        }
    }

    #[test]
    fn test_generator_port() {
        let synth = RecipeSynthesizer::new(SeededRandom::new(5));
        let recipe = tokio_test::block_on(synth.generate("garlic bread")).unwrap();
        assert_eq!(recipe.method, CookingMethod::Baking);
        assert_eq!(recipe.cooking_time, "10-15 minutes");
    }
}
