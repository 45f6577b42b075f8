use crate::domain::model::{
    Analysis, CookingMethod, Cuisine, Difficulty, DietaryTag, RecipeCategory,
};
use regex::Regex;
use std::sync::LazyLock;

/// Everything after this marker is output-format boilerplate added by the composer.
pub const FORMAT_MARKER: &str = "Provide the response in this exact JSON format:";

pub const DEFAULT_SERVINGS: &str = "4 servings";

const PROTEINS: [&str; 8] = [
    "chicken", "beef", "pork", "fish", "salmon", "shrimp", "tofu", "eggs",
];
const VEGETABLES: [&str; 7] = [
    "broccoli", "spinach", "mushroom", "carrot", "pepper", "onion", "tomato",
];
const GRAINS: [&str; 5] = ["rice", "pasta", "noodles", "quinoa", "bread"];

// Order matters: the bare pattern is tried first.
static TIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)([0-9]+)\s*minutes?",
        r"(?i)less than ([0-9]+)\s*minutes?",
        r"(?i)under ([0-9]+)\s*minutes?",
        r"(?i)within ([0-9]+)\s*minutes?",
        r"(?i)about ([0-9]+)\s*minutes?",
        r"(?i)around ([0-9]+)\s*minutes?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("time pattern is a valid regex"))
    .collect()
});

struct Profile {
    difficulty: Difficulty,
    method: CookingMethod,
    cooking_time: &'static str,
}

fn category_profile(category: RecipeCategory) -> Option<Profile> {
    let (method, cooking_time) = match category {
        RecipeCategory::NoodleUpgrade => (CookingMethod::Boiling, "5-8 minutes"),
        RecipeCategory::GarlicBread => (CookingMethod::Baking, "10-15 minutes"),
        RecipeCategory::EggBreakfast => (CookingMethod::Frying, "5-10 minutes"),
        RecipeCategory::SmoothieBowl => (CookingMethod::Blending, "3-5 minutes"),
        RecipeCategory::Sandwich => (CookingMethod::NoCook, "2-5 minutes"),
        RecipeCategory::Salad => (CookingMethod::NoCook, "5-10 minutes"),
        RecipeCategory::StirFry => (CookingMethod::StirFrying, "8-12 minutes"),
        RecipeCategory::MugCake => (CookingMethod::Microwave, "2-3 minutes"),
        RecipeCategory::NoCookSnack => (CookingMethod::NoCook, "1-3 minutes"),
        RecipeCategory::VegetarianPasta => return None,
    };
    Some(Profile {
        difficulty: Difficulty::Beginner,
        method,
        cooking_time,
    })
}

/// Strips the output-format instructions and surrounding whitespace.
pub fn clean_prompt(prompt: &str) -> &str {
    prompt
        .split(FORMAT_MARKER)
        .next()
        .unwrap_or_default()
        .trim()
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

pub fn detect_category(lower: &str) -> Option<RecipeCategory> {
    RecipeCategory::ALL
        .into_iter()
        .find(|c| lower.contains(c.phrase()))
}

pub fn detect_cuisine(lower: &str, category: Option<RecipeCategory>) -> Cuisine {
    if category == Some(RecipeCategory::VegetarianPasta) || contains_any(lower, &["italian", "pizza"])
    {
        Cuisine::Italian
    } else if category == Some(RecipeCategory::StirFry)
        || contains_any(lower, &["asian", "chinese", "stir fry"])
    {
        Cuisine::Asian
    } else if contains_any(lower, &["mexican", "taco", "burrito"]) {
        Cuisine::Mexican
    } else if contains_any(lower, &["indian", "curry"]) {
        Cuisine::Indian
    } else if contains_any(lower, &["mediterranean", "greek"]) {
        Cuisine::Mediterranean
    } else if lower.contains("french") {
        Cuisine::French
    } else {
        Cuisine::International
    }
}

pub fn detect_main_ingredients(lower: &str) -> Vec<&'static str> {
    PROTEINS
        .iter()
        .chain(VEGETABLES.iter())
        .chain(GRAINS.iter())
        .copied()
        .filter(|item| lower.contains(item))
        .collect()
}

fn is_quick_request(lower: &str) -> bool {
    contains_any(lower, &["quick", "easy", "simple"])
}

pub fn detect_difficulty(lower: &str) -> Difficulty {
    if is_quick_request(lower) {
        Difficulty::Beginner
    } else if lower.contains("advanced") {
        Difficulty::Advanced
    } else {
        Difficulty::Intermediate
    }
}

pub fn detect_method(lower: &str) -> CookingMethod {
    if contains_any(lower, &["bake", "oven"]) {
        CookingMethod::Baking
    } else if lower.contains("grill") {
        CookingMethod::Grilling
    } else if contains_any(lower, &["stir fry", "wok"]) {
        CookingMethod::StirFrying
    } else if lower.contains("steam") {
        CookingMethod::Steaming
    } else if lower.contains("roast") {
        CookingMethod::Roasting
    } else {
        CookingMethod::Saute
    }
}

/// Display range for a requested number of minutes.
pub fn time_window(requested: u32) -> String {
    let lower_bound = if requested <= 15 {
        requested.saturating_sub(2).max(10)
    } else if requested <= 30 {
        requested.saturating_sub(5).max(15)
    } else if requested <= 60 {
        requested.saturating_sub(10).max(30)
    } else {
        requested - 15
    };
    format!("{}-{} minutes", lower_bound, requested)
}

/// First explicit time request in the prompt, if any.
pub fn requested_minutes(text: &str) -> Option<u32> {
    TIME_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
    })
}

fn default_cooking_time(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "15-20 minutes",
        Difficulty::Advanced => "45-60 minutes",
        Difficulty::Intermediate => "25-35 minutes",
    }
}

pub fn detect_dietary_tags(lower: &str) -> Vec<DietaryTag> {
    let checks: [(bool, DietaryTag); 6] = [
        (lower.contains("vegetarian"), DietaryTag::Vegetarian),
        (lower.contains("vegan"), DietaryTag::Vegan),
        (lower.contains("gluten-free"), DietaryTag::GlutenFree),
        (lower.contains("dairy-free"), DietaryTag::DairyFree),
        (lower.contains("keto"), DietaryTag::KetoFriendly),
        (contains_any(lower, &["healthy", "light"]), DietaryTag::Healthy),
    ];
    checks
        .into_iter()
        .filter_map(|(hit, tag)| hit.then_some(tag))
        .collect()
}

/// Classifies a prompt. Never fails: prompts without any recognised keyword
/// fall through to the International / Intermediate / Sauté defaults.
pub fn analyze(prompt: &str) -> Analysis {
    let cleaned = clean_prompt(prompt);
    let lower = cleaned.to_lowercase();

    let specific_recipe = detect_category(&lower);
    let cuisine = detect_cuisine(&lower, specific_recipe);

    let (difficulty, method, cooking_time) = match specific_recipe {
        Some(category) => match category_profile(category) {
            Some(profile) => (
                profile.difficulty,
                profile.method,
                profile.cooking_time.to_string(),
            ),
            None => (
                Difficulty::Intermediate,
                CookingMethod::Saute,
                "25-30 minutes".to_string(),
            ),
        },
        None => {
            let difficulty = detect_difficulty(&lower);
            let cooking_time = match requested_minutes(cleaned) {
                Some(minutes) => time_window(minutes),
                None => default_cooking_time(difficulty).to_string(),
            };
            (difficulty, detect_method(&lower), cooking_time)
        }
    };

    Analysis {
        specific_recipe,
        main_ingredients: detect_main_ingredients(&lower),
        cuisine,
        difficulty,
        method,
        cooking_time,
        servings: DEFAULT_SERVINGS.to_string(),
        dietary_info: detect_dietary_tags(&lower),
        original_prompt: cleaned.to_string(),
    }
}
