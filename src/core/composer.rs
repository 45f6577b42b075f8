use crate::core::classifier::FORMAT_MARKER;
use crate::domain::ports::{choose, RandomSource};
use crate::utils::error::{RecipeError, Result};

pub const RANDOM_RECIPE_TYPES: [&str; 10] = [
    "5-minute garlic bread",
    "quick egg breakfast",
    "vegetarian pasta",
    "healthy smoothie bowl",
    "easy sandwich",
    "simple salad",
    "quick stir-fry",
    "microwave mug cake",
    "no-cook snack",
    "instant noodle upgrade",
];

const FORMAT_BODY: &str = r#"
      {
        "title": "Recipe Name",
        "cookingTime": "X minutes",
        "servings": "X servings",
        "ingredients": ["ingredient 1", "ingredient 2"],
        "steps": ["step 1", "step 2"],
        "tips": ["tip 1", "tip 2"]
      }

      Keep ingredients simple and common (max 8 items). Keep steps clear and concise (max 5 steps). Include 2-3 helpful tips."#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMode {
    Random,
    Manual(String),
    Pantry(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub time_limit: Option<u32>,
    pub diet: Option<String>,
    pub effort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub mode: RequestMode,
    pub filters: Filters,
}

impl PromptRequest {
    pub fn new(mode: RequestMode) -> Self {
        Self {
            mode,
            filters: Filters::default(),
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }
}

/// "any" in a filter selector means the filter is unset.
fn active_filter(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("any"))
}

fn required_text<'a>(text: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RecipeError::ComposeError {
            message: format!("Please enter {}", what),
        });
    }
    Ok(trimmed)
}

/// Builds the free-text prompt sent to the synthesizer.
pub fn compose_prompt<R: RandomSource + ?Sized>(request: &PromptRequest, random: &R) -> Result<String> {
    let mut prompt = match &request.mode {
        RequestMode::Random => {
            let recipe_type = choose(random, &RANDOM_RECIPE_TYPES);
            format!(
                "Give me a quick, easy, and delicious recipe for {}.",
                recipe_type
            )
        }
        RequestMode::Manual(text) => format!(
            "Give me a quick, easy, and delicious recipe for {}.",
            required_text(text, "the recipe you want")?
        ),
        RequestMode::Pantry(items) => format!(
            "Create a quick, easy, and delicious recipe using these ingredients I have: {}. You can suggest adding 1-2 common pantry staples if needed.",
            required_text(items, "the ingredients you have")?
        ),
    };

    if let Some(minutes) = request.filters.time_limit {
        prompt.push_str(&format!(" It should take less than {} minutes.", minutes));
    }
    if let Some(diet) = active_filter(&request.filters.diet) {
        prompt.push_str(&format!(" Make it {}.", diet));
    }
    if let Some(effort) = active_filter(&request.filters.effort) {
        prompt.push_str(&format!(" Keep the effort level {}.", effort));
    }

    prompt.push(' ');
    prompt.push_str(FORMAT_MARKER);
    prompt.push_str(FORMAT_BODY);

    tracing::debug!("Composed prompt of {} characters", prompt.len());
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::{analyze, clean_prompt};
    use crate::domain::model::DietaryTag;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn pick_index(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_random_mode_uses_random_source() {
        let prompt = compose_prompt(&PromptRequest::new(RequestMode::Random), &Fixed(9)).unwrap();
        assert_eq!(
            clean_prompt(&prompt),
            "Give me a quick, easy, and delicious recipe for instant noodle upgrade."
        );
    }

    #[test]
    fn test_manual_mode_with_filters() {
        let request = PromptRequest::new(RequestMode::Manual("  chicken curry ".to_string()))
            .with_filters(Filters {
                time_limit: Some(20),
                diet: Some("dairy-free".to_string()),
                effort: Some("minimal".to_string()),
            });
        let prompt = compose_prompt(&request, &Fixed(0)).unwrap();
        assert_eq!(
            clean_prompt(&prompt),
            "Give me a quick, easy, and delicious recipe for chicken curry. It should take less than 20 minutes. Make it dairy-free. Keep the effort level minimal."
        );

        let analysis = analyze(&prompt);
        assert_eq!(analysis.cooking_time, "15-20 minutes");
        assert_eq!(analysis.dietary_info, vec![DietaryTag::DairyFree]);
    }

    #[test]
    fn test_pantry_mode() {
        let request = PromptRequest::new(RequestMode::Pantry("rice, eggs, spinach".to_string()));
        let prompt = compose_prompt(&request, &Fixed(0)).unwrap();
        assert!(prompt.starts_with(
            "Create a quick, easy, and delicious recipe using these ingredients I have: rice, eggs, spinach."
        ));
        assert!(prompt.contains(FORMAT_MARKER));
    }

    #[test]
    fn test_any_filter_is_ignored() {
        let request = PromptRequest::new(RequestMode::Manual("soup".to_string())).with_filters(
            Filters {
                time_limit: None,
                diet: Some("any".to_string()),
                effort: Some("Any".to_string()),
            },
        );
        let prompt = compose_prompt(&request, &Fixed(0)).unwrap();
        assert_eq!(
            clean_prompt(&prompt),
            "Give me a quick, easy, and delicious recipe for soup."
        );
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let manual = PromptRequest::new(RequestMode::Manual("   ".to_string()));
        assert!(matches!(
            compose_prompt(&manual, &Fixed(0)),
            Err(RecipeError::ComposeError { .. })
        ));

        let pantry = PromptRequest::new(RequestMode::Pantry(String::new()));
        assert!(compose_prompt(&pantry, &Fixed(0)).is_err());
    }
}
