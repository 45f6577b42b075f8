use crate::domain::model::Recipe;

/// Full plain-text rendering, as copied to the clipboard.
pub fn clipboard_text(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ing| format!("• {}", ing))
        .collect::<Vec<_>>()
        .join("\n");
    let steps = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");
    let tips = recipe
        .tips
        .iter()
        .map(|tip| format!("💡 {}", tip))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n⏱️ {} | 👥 {}\n\nIngredients:\n{}\n\nInstructions:\n{}\n\nTips:\n{}",
        recipe.title, recipe.cooking_time, recipe.servings, ingredients, steps, tips
    )
}

pub fn share_text(recipe: &Recipe) -> String {
    format!(
        "Check out this recipe: {}\n\n⏱️ {} | 👥 {}\n\nGenerated with Quick Recipe AI!",
        recipe.title, recipe.cooking_time, recipe.servings
    )
}
