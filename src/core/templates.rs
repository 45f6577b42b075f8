//! Fixed ingredient, step and tip lists for the recipe archetypes.

use crate::domain::model::RecipeCategory;

pub struct CategoryTemplate {
    pub ingredients: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub tips: &'static [&'static str],
}

const NOODLE_UPGRADE: CategoryTemplate = CategoryTemplate {
    ingredients: &[
        "1 packet instant noodles (any flavor)",
        "1 egg",
        "2 green onions, chopped",
        "1 tbsp soy sauce",
        "1 tsp sesame oil",
        "1/2 cup frozen vegetables",
        "1 clove garlic, minced",
        "Red pepper flakes (optional)",
    ],
    steps: &[
        "Boil water in a pot and cook instant noodles according to package directions.",
        "While noodles cook, heat a small pan and scramble the egg with a pinch of salt.",
        "Drain noodles and return to pot. Add frozen vegetables and let them heat through.",
        "Add soy sauce, sesame oil, and minced garlic to the noodles. Mix well.",
        "Top with scrambled egg, chopped green onions, and red pepper flakes if desired.",
    ],
    tips: &[
        "Don't overcook the instant noodles - they should be al dente.",
        "Add the frozen vegetables at the end to keep them crisp.",
        "Use low-sodium soy sauce to control the saltiness.",
    ],
};

const GARLIC_BREAD: CategoryTemplate = CategoryTemplate {
    ingredients: &[
        "1 loaf French bread or baguette",
        "1/2 cup butter, softened",
        "4 cloves garlic, minced",
        "2 tbsp fresh parsley, chopped",
        "1/4 cup grated Parmesan cheese",
        "Salt and black pepper to taste",
    ],
    steps: &[
        "Preheat oven to 400°F (200°C).",
        "Mix softened butter with minced garlic, parsley, and Parmesan cheese.",
        "Slice bread diagonally and spread garlic butter mixture on each slice.",
        "Place on baking sheet and bake for 10-12 minutes until golden and crispy.",
        "Serve immediately while hot.",
    ],
    tips: &[
        "Let the butter come to room temperature for easier mixing.",
        "Watch the bread closely in the oven - it can burn quickly.",
        "Serve immediately for the best texture and flavor.",
    ],
};

const EGG_BREAKFAST: CategoryTemplate = CategoryTemplate {
    ingredients: &[
        "2-3 eggs",
        "1 tbsp butter or oil",
        "Salt and black pepper to taste",
        "1 slice bread (optional)",
        "1 tbsp milk (optional)",
    ],
    steps: &[
        "Heat butter or oil in a non-stick pan over medium heat.",
        "Crack eggs into the pan and cook to your preference (sunny side up, over easy, or scrambled).",
        "Season with salt and black pepper.",
        "Serve with toast if desired.",
    ],
    tips: &[
        "Use a non-stick pan for easier egg cooking.",
        "Don't overcook the eggs - they should be slightly runny.",
        "Add a splash of milk to scrambled eggs for fluffiness.",
    ],
};

const SMOOTHIE_BOWL: CategoryTemplate = CategoryTemplate {
    ingredients: &[
        "1 frozen banana",
        "1/2 cup frozen berries",
        "1/2 cup milk or almond milk",
        "1 tbsp honey or maple syrup",
        "1 tbsp chia seeds",
        "1/2 cup granola",
        "Fresh fruit for topping",
    ],
    steps: &[
        "Add frozen banana, berries, milk, and honey to a blender.",
        "Blend on high speed until smooth and creamy.",
        "Pour into a bowl and top with granola, chia seeds, and fresh fruit.",
        "Serve immediately.",
    ],
    tips: &[
        "Use frozen fruit for a thicker, colder smoothie.",
        "Add liquid gradually to achieve desired consistency.",
        "Eat immediately to prevent the granola from getting soggy.",
    ],
};

const SANDWICH: CategoryTemplate = CategoryTemplate {
    ingredients: &[
        "2 slices bread",
        "2-3 slices deli meat",
        "1-2 slices cheese",
        "Lettuce leaves",
        "2-3 tomato slices",
        "Mayonnaise or mustard",
        "Salt and black pepper to taste",
    ],
    steps: &[
        "Lay out two slices of bread.",
        "Spread mayonnaise or mustard on one or both slices.",
        "Layer on deli meat, cheese, lettuce, and tomato.",
        "Season with salt and black pepper.",
        "Close sandwich and cut in half if desired.",
    ],
    tips: &[
        "Toast the bread lightly for better texture.",
        "Layer ingredients in order: spread, protein, cheese, vegetables.",
        "Don't overstuff the sandwich - it will be hard to eat.",
    ],
};

const SALAD: CategoryTemplate = CategoryTemplate {
    ingredients: &[
        "2 cups mixed greens",
        "1 cucumber, sliced",
        "1 tomato, diced",
        "1/4 red onion, sliced",
        "1/4 cup croutons",
        "2 tbsp olive oil",
        "1 tbsp balsamic vinegar",
        "Salt and black pepper to taste",
    ],
    steps: &[
        "Wash and dry mixed greens, then place in a large bowl.",
        "Add sliced cucumber, diced tomato, and sliced red onion.",
        "Whisk together olive oil, balsamic vinegar, salt, and black pepper for dressing.",
        "Drizzle dressing over salad and toss gently.",
        "Top with croutons and serve immediately.",
    ],
    tips: &[
        "Dry the greens thoroughly to prevent watery dressing.",
        "Add dressing just before serving to keep vegetables crisp.",
        "Use a variety of textures for a more interesting salad.",
    ],
};

const STIR_FRY: CategoryTemplate = CategoryTemplate {
    ingredients: &[
        "1 lb protein (chicken, beef, or tofu)",
        "2 cups mixed vegetables",
        "2 tbsp vegetable oil",
        "2 cloves garlic, minced",
        "1 tbsp ginger, grated",
        "3 tbsp soy sauce",
        "1 tbsp sesame oil",
        "2 green onions, chopped",
    ],
    steps: &[
        "Heat oil in a large wok or skillet over high heat.",
        "Add protein and cook for 2-3 minutes until almost done. Remove and set aside.",
        "Add vegetables and stir-fry for 3-4 minutes until tender-crisp.",
        "Return protein to pan, add soy sauce and sesame oil, toss everything together.",
        "Garnish with chopped green onions and serve immediately.",
    ],
    tips: &[
        "Keep the heat high and ingredients moving for best results.",
        "Cut all ingredients to similar sizes for even cooking.",
        "Don't overcrowd the pan - cook in batches if needed.",
    ],
};

const MUG_CAKE: CategoryTemplate = CategoryTemplate {
    ingredients: &[
        "4 tbsp all-purpose flour",
        "4 tbsp sugar",
        "2 tbsp cocoa powder",
        "1/4 tsp baking powder",
        "3 tbsp milk",
        "2 tbsp vegetable oil",
        "1/4 tsp vanilla extract",
        "2 tbsp chocolate chips",
    ],
    steps: &[
        "In a microwave-safe mug, whisk together flour, sugar, cocoa powder, and baking powder.",
        "Add milk, oil, and vanilla extract. Mix until smooth.",
        "Stir in chocolate chips.",
        "Microwave on high for 1-2 minutes until cake is set.",
        "Let cool slightly before eating.",
    ],
    tips: &[
        "Don't overmix the batter - it will make the cake tough.",
        "Check the cake after 1 minute - microwave times vary.",
        "Let it cool slightly before eating to avoid burning your mouth.",
    ],
};

const NO_COOK_SNACK: CategoryTemplate = CategoryTemplate {
    ingredients: &[
        "1 cup mixed nuts",
        "1/4 cup dried fruit",
        "1/4 cup dark chocolate chips",
        "1/4 cup pretzels",
        "1/4 cup popcorn",
    ],
    steps: &[
        "Mix all nuts, dried fruit, and pretzels in a bowl.",
        "Add chocolate chips and popcorn.",
        "Toss everything together gently.",
        "Store in an airtight container or serve immediately.",
    ],
    tips: &[
        "Store in an airtight container to keep ingredients fresh.",
        "Mix different textures for a more satisfying snack.",
        "Adjust the ratio of ingredients to your taste preferences.",
    ],
};

/// `None` for categories that are assembled from the generic generators.
pub fn template_for(category: RecipeCategory) -> Option<&'static CategoryTemplate> {
    match category {
        RecipeCategory::NoodleUpgrade => Some(&NOODLE_UPGRADE),
        RecipeCategory::GarlicBread => Some(&GARLIC_BREAD),
        RecipeCategory::EggBreakfast => Some(&EGG_BREAKFAST),
        RecipeCategory::SmoothieBowl => Some(&SMOOTHIE_BOWL),
        RecipeCategory::Sandwich => Some(&SANDWICH),
        RecipeCategory::Salad => Some(&SALAD),
        RecipeCategory::StirFry => Some(&STIR_FRY),
        RecipeCategory::MugCake => Some(&MUG_CAKE),
        RecipeCategory::NoCookSnack => Some(&NO_COOK_SNACK),
        RecipeCategory::VegetarianPasta => None,
    }
}
