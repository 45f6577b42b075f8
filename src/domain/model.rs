use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CookingMethod {
    #[serde(rename = "Sauté")]
    Saute,
    Baking,
    Grilling,
    #[serde(rename = "Stir-frying")]
    StirFrying,
    Steaming,
    Roasting,
    Boiling,
    Frying,
    Blending,
    #[serde(rename = "No-cook")]
    NoCook,
    Microwave,
}

impl CookingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookingMethod::Saute => "Sauté",
            CookingMethod::Baking => "Baking",
            CookingMethod::Grilling => "Grilling",
            CookingMethod::StirFrying => "Stir-frying",
            CookingMethod::Steaming => "Steaming",
            CookingMethod::Roasting => "Roasting",
            CookingMethod::Boiling => "Boiling",
            CookingMethod::Frying => "Frying",
            CookingMethod::Blending => "Blending",
            CookingMethod::NoCook => "No-cook",
            CookingMethod::Microwave => "Microwave",
        }
    }
}

impl fmt::Display for CookingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cuisine {
    Italian,
    Asian,
    Mexican,
    Indian,
    Mediterranean,
    French,
    International,
}

impl Cuisine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Asian => "Asian",
            Cuisine::Mexican => "Mexican",
            Cuisine::Indian => "Indian",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::French => "French",
            Cuisine::International => "International",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-free")]
    GlutenFree,
    #[serde(rename = "Dairy-free")]
    DairyFree,
    #[serde(rename = "Keto-friendly")]
    KetoFriendly,
    Healthy,
}

impl DietaryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "Vegetarian",
            DietaryTag::Vegan => "Vegan",
            DietaryTag::GlutenFree => "Gluten-free",
            DietaryTag::DairyFree => "Dairy-free",
            DietaryTag::KetoFriendly => "Keto-friendly",
            DietaryTag::Healthy => "Healthy",
        }
    }
}

/// The recipe archetypes recognised by an exact phrase in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeCategory {
    NoodleUpgrade,
    GarlicBread,
    EggBreakfast,
    VegetarianPasta,
    SmoothieBowl,
    Sandwich,
    Salad,
    StirFry,
    MugCake,
    NoCookSnack,
}

impl RecipeCategory {
    /// Detection order; the first phrase found in the prompt wins.
    pub const ALL: [RecipeCategory; 10] = [
        RecipeCategory::NoodleUpgrade,
        RecipeCategory::GarlicBread,
        RecipeCategory::EggBreakfast,
        RecipeCategory::VegetarianPasta,
        RecipeCategory::SmoothieBowl,
        RecipeCategory::Sandwich,
        RecipeCategory::Salad,
        RecipeCategory::StirFry,
        RecipeCategory::MugCake,
        RecipeCategory::NoCookSnack,
    ];

    pub fn phrase(&self) -> &'static str {
        match self {
            RecipeCategory::NoodleUpgrade => "instant noodle upgrade",
            RecipeCategory::GarlicBread => "garlic bread",
            RecipeCategory::EggBreakfast => "egg breakfast",
            RecipeCategory::VegetarianPasta => "vegetarian pasta",
            RecipeCategory::SmoothieBowl => "healthy smoothie bowl",
            RecipeCategory::Sandwich => "easy sandwich",
            RecipeCategory::Salad => "simple salad",
            RecipeCategory::StirFry => "quick stir-fry",
            RecipeCategory::MugCake => "microwave mug cake",
            RecipeCategory::NoCookSnack => "no-cook snack",
        }
    }

    pub fn recipe_type(&self) -> &'static str {
        match self {
            RecipeCategory::NoodleUpgrade => "upgrade",
            RecipeCategory::GarlicBread => "bread",
            RecipeCategory::EggBreakfast => "breakfast",
            RecipeCategory::VegetarianPasta => "pasta",
            RecipeCategory::SmoothieBowl => "smoothie",
            RecipeCategory::Sandwich => "sandwich",
            RecipeCategory::Salad => "salad",
            RecipeCategory::StirFry => "stir-fry",
            RecipeCategory::MugCake => "dessert",
            RecipeCategory::NoCookSnack => "snack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub cuisine: Cuisine,
    pub difficulty: Difficulty,
    pub method: CookingMethod,
    pub cooking_time: String,
    pub servings: String,
    pub dietary_info: Vec<DietaryTag>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
}

/// Classification of a single prompt. Derived fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub specific_recipe: Option<RecipeCategory>,
    pub main_ingredients: Vec<&'static str>,
    pub cuisine: Cuisine,
    pub difficulty: Difficulty,
    pub method: CookingMethod,
    pub cooking_time: String,
    pub servings: String,
    pub dietary_info: Vec<DietaryTag>,
    pub original_prompt: String,
}

impl Analysis {
    pub fn recipe_type(&self) -> Option<&'static str> {
        self.specific_recipe.map(|c| c.recipe_type())
    }

    pub fn is_quick(&self) -> bool {
        self.difficulty == Difficulty::Beginner
    }

    pub fn is_vegetarian(&self) -> bool {
        self.dietary_info
            .iter()
            .any(|tag| matches!(tag, DietaryTag::Vegetarian | DietaryTag::Vegan))
    }

    pub fn has_ingredient(&self, name: &str) -> bool {
        self.main_ingredients.contains(&name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateResponse {
    pub recipe: Recipe,
}
