use crate::domain::model::Recipe;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub recipe: Recipe,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadySaved,
}

/// Favorites for one session, keyed by recipe title. Nothing is persisted.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    entries: Vec<Favorite>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, recipe: Recipe) -> AddOutcome {
        if self.contains(&recipe.title) {
            return AddOutcome::AlreadySaved;
        }
        tracing::debug!("Saving favorite: {}", recipe.title);
        self.entries.push(Favorite {
            recipe,
            saved_at: Utc::now(),
        });
        AddOutcome::Added
    }

    /// Returns whether a recipe with that title was removed.
    pub fn remove(&mut self, title: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|fav| fav.recipe.title != title);
        before != self.entries.len()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.entries.iter().any(|fav| fav.recipe.title == title)
    }

    pub fn get(&self, index: usize) -> Option<&Favorite> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favorite> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> String {
        match self.entries.len() {
            0 => "No favorites yet".to_string(),
            1 => "You have 1 saved recipe".to_string(),
            n => format!("You have {} saved recipes", n),
        }
    }
}
