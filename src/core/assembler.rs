use crate::core::templates::template_for;
use crate::domain::model::{Analysis, CookingMethod, Cuisine};
use crate::domain::ports::{choose, RandomSource};

pub const MAX_TIPS: usize = 3;

const QUICK_ADJECTIVES: [&str; 3] = ["Quick", "Easy", "Simple"];
const CRAFTED_ADJECTIVES: [&str; 3] = ["Gourmet", "Classic", "Artisan"];

pub fn emoji_set(cuisine: Cuisine) -> [&'static str; 3] {
    match cuisine {
        Cuisine::Asian => ["🥢", "🍜", "🥟"],
        Cuisine::Italian => ["🍝", "🍕", "🧄"],
        Cuisine::Mexican => ["🌮", "🌶️", "🥑"],
        Cuisine::Indian => ["🍛", "🌶️", "🥘"],
        Cuisine::Mediterranean => ["🫒", "🍅", "🧄"],
        Cuisine::French => ["🥖", "🧄", "🍷"],
        Cuisine::International => ["🍽️", "👨‍🍳", "✨"],
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn title<R: RandomSource + ?Sized>(analysis: &Analysis, random: &R) -> String {
    let emoji = choose(random, &emoji_set(analysis.cuisine));

    if let Some(category) = analysis.specific_recipe {
        return format!("{} {}", emoji, capitalize(category.phrase()));
    }

    let main = capitalize(analysis.main_ingredients.first().copied().unwrap_or("Surprise"));

    if analysis.cuisine != Cuisine::International {
        let dish = if analysis.method == CookingMethod::StirFrying {
            "Stir-fry"
        } else {
            "Dish"
        };
        return format!("{} {} {} {}", emoji, analysis.cuisine, main, dish);
    }

    let adjectives = if analysis.is_quick() {
        &QUICK_ADJECTIVES
    } else {
        &CRAFTED_ADJECTIVES
    };
    let adjective = choose(random, adjectives);
    let dish = if analysis.method == CookingMethod::Baking {
        "Bake"
    } else {
        "Sauté"
    };
    format!("{} {} {} {}", emoji, adjective, main, dish)
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

pub fn ingredients(analysis: &Analysis) -> Vec<String> {
    match analysis.specific_recipe.and_then(template_for) {
        Some(template) => owned(template.ingredients),
        None => generic_ingredients(analysis),
    }
}

pub fn steps(analysis: &Analysis) -> Vec<String> {
    match analysis.specific_recipe.and_then(template_for) {
        Some(template) => owned(template.steps),
        None => generic_steps(analysis),
    }
}

pub fn tips(analysis: &Analysis) -> Vec<String> {
    let mut tips = match analysis.specific_recipe.and_then(template_for) {
        Some(template) => owned(template.tips),
        None => generic_tips(analysis),
    };
    tips.truncate(MAX_TIPS);
    tips
}

pub fn generic_ingredients(analysis: &Analysis) -> Vec<String> {
    let mut list: Vec<&str> = Vec::new();
    let vegetarian = analysis.is_vegetarian();

    if analysis.has_ingredient("chicken") && !vegetarian {
        list.push("1 lb (450g) chicken breast, cut into bite-sized pieces");
    } else if analysis.has_ingredient("beef") && !vegetarian {
        list.push("1 lb (450g) beef sirloin, sliced thin");
    } else if analysis.has_ingredient("tofu") || vegetarian {
        list.push("14 oz (400g) firm tofu, cubed");
    }

    if analysis.has_ingredient("broccoli") {
        list.push("2 cups fresh broccoli florets");
    }
    if analysis.has_ingredient("mushroom") {
        list.push("8 oz (225g) mushrooms, sliced");
    }
    if analysis.has_ingredient("pepper") {
        list.push("1 large bell pepper, sliced");
    }

    list.push("3 cloves garlic, minced");
    list.push("1 medium onion, diced");

    match analysis.cuisine {
        Cuisine::Asian => {
            list.push("2 tbsp vegetable oil");
            list.push("1 tbsp sesame oil");
            list.push("3 tbsp soy sauce");
            list.push("1 tbsp rice vinegar");
            list.push("1 tsp fresh ginger, grated");
        }
        Cuisine::Italian => {
            list.push("2 tbsp olive oil");
            list.push("1 tsp dried oregano");
            list.push("1/2 cup grated Parmesan cheese");
            list.push("2 tbsp fresh basil, chopped");
        }
        Cuisine::Mexican => {
            list.push("2 tbsp olive oil");
            list.push("1 tsp ground cumin");
            list.push("1 tsp paprika");
            list.push("Juice of 1 lime");
        }
        _ => list.push("2 tbsp olive oil"),
    }

    list.push("Salt and black pepper to taste");
    owned(&list)
}

pub fn generic_steps(analysis: &Analysis) -> Vec<String> {
    let mut list: Vec<&str> = vec![
        "Prepare all ingredients by washing, chopping, and measuring before you begin cooking (mise en place).",
    ];

    match analysis.method {
        CookingMethod::StirFrying | CookingMethod::Saute => {
            list.push("Heat oil in a large skillet or wok over medium-high heat until shimmering.");
            list.push("Add aromatics (garlic and onion) and cook for 30-60 seconds until fragrant.");

            let has_meat = ["chicken", "beef", "pork"]
                .iter()
                .any(|meat| analysis.has_ingredient(meat));
            if has_meat {
                list.push("Add protein and cook for 4-6 minutes until golden brown and cooked through. Remove and set aside.");
                list.push("Add vegetables to the same pan and stir-fry for 3-4 minutes until tender-crisp.");
                list.push("Return protein to pan, add seasonings and sauces, toss everything together for 1-2 minutes.");
            } else {
                list.push("Add vegetables and cook for 4-5 minutes until tender-crisp.");
                list.push("Add seasonings and sauces, toss to combine and cook for another 1-2 minutes.");
            }
        }
        CookingMethod::Baking => {
            list.push("Preheat oven to 400°F (200°C).");
            list.push("Toss all ingredients with oil and seasonings in a large baking dish.");
            list.push("Bake for 25-30 minutes, stirring once halfway through, until ingredients are tender and golden.");
        }
        CookingMethod::Roasting => {
            list.push("Preheat oven to 425°F (220°C).");
            list.push("Arrange ingredients on a large baking sheet, drizzle with oil and seasonings.");
            list.push("Roast for 20-25 minutes until caramelized and cooked through.");
        }
        _ => {}
    }

    list.push("Taste and adjust seasoning with salt and pepper as needed.");
    list.push("Serve immediately while hot, garnished with fresh herbs if desired.");
    owned(&list)
}

pub fn generic_tips(analysis: &Analysis) -> Vec<String> {
    let mut list: Vec<&str> = Vec::new();

    match analysis.method {
        CookingMethod::StirFrying => {
            list.push("Keep the heat high and ingredients moving to achieve the characteristic \"wok hei\" (breath of the wok) flavor.");
            list.push("Cut all ingredients to similar sizes for even cooking.");
        }
        CookingMethod::Baking => {
            list.push("Avoid overcrowding the baking dish - ingredients should be in a single layer for proper browning.");
        }
        _ => {}
    }

    match analysis.cuisine {
        Cuisine::Asian => {
            list.push("Add soy sauce at the end to prevent it from burning and becoming bitter.")
        }
        Cuisine::Italian => {
            list.push("Save some pasta water if using pasta - the starch helps bind sauces.")
        }
        _ => {}
    }

    list.push("Let the dish rest for 2-3 minutes after cooking to allow flavors to meld together.");

    if analysis.is_quick() {
        list.push("Prep all ingredients before you start cooking - this makes the process much smoother.");
    }

    list.truncate(MAX_TIPS);
    owned(&list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::SeededRandom;
    use crate::core::classifier::analyze;

    struct First;

    impl RandomSource for First {
        fn pick_index(&self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_specific_recipe_title() {
        let analysis = analyze("garlic bread for two");
        assert_eq!(title(&analysis, &First), "🍽️ Garlic bread");
    }

    #[test]
    fn test_cuisine_title() {
        let analysis = analyze("chinese chicken in a wok");
        assert_eq!(title(&analysis, &First), "🥢 Asian Chicken Stir-fry");

        let analysis = analyze("greek salmon");
        assert_eq!(title(&analysis, &First), "🫒 Mediterranean Salmon Dish");
    }

    #[test]
    fn test_international_title_uses_adjective() {
        let analysis = analyze("bake something");
        assert_eq!(title(&analysis, &First), "🍽️ Gourmet Surprise Bake");

        let analysis = analyze("easy beef");
        assert_eq!(title(&analysis, &First), "🍽️ Quick Beef Sauté");
    }

    #[test]
    fn test_seeded_titles_are_reproducible() {
        let analysis = analyze("tofu with rice");
        let a = title(&analysis, &SeededRandom::new(7));
        let b = title(&analysis, &SeededRandom::new(7));
        assert_eq!(a, b);
        assert!(a.ends_with(" Tofu Sauté"));
    }

    #[test]
    fn test_template_lists() {
        let analysis = analyze("a microwave mug cake");
        assert_eq!(ingredients(&analysis)[0], "4 tbsp all-purpose flour");
        assert_eq!(steps(&analysis).len(), 5);
        assert_eq!(tips(&analysis).len(), 3);
    }

    #[test]
    fn test_generic_asian_ingredients() {
        let analysis = analyze("asian chicken with broccoli and pepper");
        let list = ingredients(&analysis);
        assert_eq!(
            list,
            vec![
                "1 lb (450g) chicken breast, cut into bite-sized pieces",
                "2 cups fresh broccoli florets",
                "1 large bell pepper, sliced",
                "3 cloves garlic, minced",
                "1 medium onion, diced",
                "2 tbsp vegetable oil",
                "1 tbsp sesame oil",
                "3 tbsp soy sauce",
                "1 tbsp rice vinegar",
                "1 tsp fresh ginger, grated",
                "Salt and black pepper to taste",
            ]
        );
    }

    #[test]
    fn test_vegetarian_swaps_protein_for_tofu() {
        let analysis = analyze("vegetarian italian chicken");
        let list = ingredients(&analysis);
        assert_eq!(list[0], "14 oz (400g) firm tofu, cubed");
        assert!(list.contains(&"1 tsp dried oregano".to_string()));
        assert!(!list.iter().any(|i| i.contains("chicken")));
    }

    #[test]
    fn test_vegetarian_pasta_uses_generic_lists() {
        let analysis = analyze("vegetarian pasta");
        let list = ingredients(&analysis);
        assert_eq!(list[0], "14 oz (400g) firm tofu, cubed");
        assert!(list.contains(&"2 tbsp fresh basil, chopped".to_string()));
        assert_eq!(
            tips(&analysis)[0],
            "Save some pasta water if using pasta - the starch helps bind sauces."
        );
    }

    #[test]
    fn test_generic_steps_by_method() {
        let meat = generic_steps(&analyze("pork chops"));
        assert_eq!(meat.len(), 8);
        assert!(meat[3].starts_with("Add protein"));

        let roast = generic_steps(&analyze("roast carrot"));
        assert_eq!(roast[1], "Preheat oven to 425°F (220°C).");

        let grill = generic_steps(&analyze("grill fish"));
        assert_eq!(grill.len(), 3);
    }

    #[test]
    fn test_generic_tips_capped() {
        let analysis = analyze("quick asian stir fry");
        let list = tips(&analysis);
        assert_eq!(list.len(), 3);
        assert!(list[0].contains("wok hei"));
        assert_eq!(
            list[2],
            "Add soy sauce at the end to prevent it from burning and becoming bitter."
        );
    }
}
