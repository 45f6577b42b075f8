use crate::core::composer::{compose_prompt, Filters, PromptRequest, RequestMode};
use crate::core::export::{clipboard_text, share_text};
use crate::core::favorites::{AddOutcome, FavoritesStore};
use crate::domain::model::Recipe;
use crate::domain::ports::{RandomSource, RecipeGenerator};
use crate::utils::error::{RecipeError, Result};

pub const HELP: &str = "\
Commands:
  random                  surprise me
  manual <description>    a recipe for what you describe
  pantry <ingredients>    a recipe from what you have
  time <minutes|any>      time limit filter
  diet <preference|any>   diet filter (vegetarian, vegan, keto, gluten-free, dairy-free)
  effort <level|any>      effort filter (minimal, moderate)
  save                    add the current recipe to favorites
  favorites               list favorites
  show <n>                show favorite number n
  remove <n|title>        remove a favorite
  copy                    print the current recipe as plain text
  share                   print a short share message
  help                    this text
  quit                    end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate(RequestMode),
    TimeLimit(Option<u32>),
    Diet(Option<String>),
    Effort(Option<String>),
    Save,
    Favorites,
    Show(usize),
    Remove(String),
    Copy,
    Share,
    Help,
    Quit,
}

fn optional_value(arg: &str) -> Option<String> {
    if arg.is_empty() || arg.eq_ignore_ascii_case("any") {
        None
    } else {
        Some(arg.to_string())
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "random" => Ok(Command::Generate(RequestMode::Random)),
            "manual" => Ok(Command::Generate(RequestMode::Manual(arg.to_string()))),
            "pantry" => Ok(Command::Generate(RequestMode::Pantry(arg.to_string()))),
            "time" => match optional_value(arg) {
                None => Ok(Command::TimeLimit(None)),
                Some(value) => value
                    .parse::<u32>()
                    .map(|minutes| Command::TimeLimit(Some(minutes)))
                    .map_err(|_| {
                        RecipeError::invalid_command(format!(
                            "'{}' is not a number of minutes",
                            value
                        ))
                    }),
            },
            "diet" => Ok(Command::Diet(optional_value(arg))),
            "effort" => Ok(Command::Effort(optional_value(arg))),
            "save" => Ok(Command::Save),
            "favorites" => Ok(Command::Favorites),
            "show" => arg
                .parse::<usize>()
                .map(Command::Show)
                .map_err(|_| RecipeError::invalid_command("Usage: show <n>")),
            "remove" if !arg.is_empty() => Ok(Command::Remove(arg.to_string())),
            "remove" => Err(RecipeError::invalid_command("Usage: remove <n|title>")),
            "copy" => Ok(Command::Copy),
            "share" => Ok(Command::Share),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err(RecipeError::invalid_command(
                "Type 'help' for a list of commands",
            )),
            other => Err(RecipeError::invalid_command(format!(
                "Unknown command '{}'. Type 'help'.",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// One user's session: current filters, the last recipe and the favorites list.
pub struct Session {
    generator: Box<dyn RecipeGenerator>,
    random: Box<dyn RandomSource>,
    filters: Filters,
    current: Option<Recipe>,
    favorites: FavoritesStore,
}

impl Session {
    pub fn new(generator: Box<dyn RecipeGenerator>, random: Box<dyn RandomSource>) -> Self {
        Self {
            generator,
            random,
            filters: Filters::default(),
            current: None,
            favorites: FavoritesStore::new(),
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn current(&self) -> Option<&Recipe> {
        self.current.as_ref()
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Composes a prompt for `mode` and asks the generator for a recipe.
    /// On failure the previous recipe stays current.
    pub async fn generate(&mut self, mode: RequestMode) -> Result<&Recipe> {
        let request = PromptRequest::new(mode).with_filters(self.filters.clone());
        let prompt = compose_prompt(&request, self.random.as_ref())?;

        let recipe = self.generator.generate(&prompt).await.inspect_err(|e| {
            tracing::error!("Error generating recipe: {}", e);
        })?;
        Ok(&*self.current.insert(recipe))
    }

    pub async fn execute(&mut self, command: Command) -> Reply {
        let text = match command {
            Command::Generate(mode) => match self.generate(mode).await {
                Ok(recipe) => clipboard_text(recipe),
                Err(e) => e.user_friendly_message(),
            },
            Command::TimeLimit(minutes) => {
                self.filters.time_limit = minutes;
                match minutes {
                    Some(m) => format!("Time limit set to {} minutes", m),
                    None => "Any time".to_string(),
                }
            }
            Command::Diet(diet) => {
                let text = match &diet {
                    Some(d) => format!("Diet preference set to {}", d),
                    None => "Any diet".to_string(),
                };
                self.filters.diet = diet;
                text
            }
            Command::Effort(effort) => {
                let text = match &effort {
                    Some(e) => format!("Effort level set to {}", e),
                    None => "Any effort".to_string(),
                };
                self.filters.effort = effort;
                text
            }
            Command::Save => match &self.current {
                None => "Generate a recipe first".to_string(),
                Some(recipe) => match self.favorites.add(recipe.clone()) {
                    AddOutcome::Added => "Saved to favorites!".to_string(),
                    AddOutcome::AlreadySaved => {
                        "This recipe is already in your favorites.".to_string()
                    }
                },
            },
            Command::Favorites => self.list_favorites(),
            Command::Show(n) => match n.checked_sub(1).and_then(|i| self.favorites.get(i)) {
                Some(fav) => clipboard_text(&fav.recipe),
                None => format!("No favorite number {}", n),
            },
            Command::Remove(target) => self.remove_favorite(&target),
            Command::Copy => match &self.current {
                Some(recipe) => clipboard_text(recipe),
                None => "Generate a recipe first".to_string(),
            },
            Command::Share => match &self.current {
                Some(recipe) => share_text(recipe),
                None => "Generate a recipe first".to_string(),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => return Reply::Quit,
        };
        Reply::Text(text)
    }

    fn list_favorites(&self) -> String {
        let mut lines = vec![self.favorites.summary()];
        for (i, fav) in self.favorites.iter().enumerate() {
            lines.push(format!(
                "{}. {} ({}, saved {})",
                i + 1,
                fav.recipe.title,
                fav.recipe.cooking_time,
                fav.saved_at.format("%H:%M:%S")
            ));
        }
        lines.join("\n")
    }

    fn remove_favorite(&mut self, target: &str) -> String {
        let title = match target.parse::<usize>() {
            Ok(n) => match n.checked_sub(1).and_then(|i| self.favorites.get(i)) {
                Some(fav) => fav.recipe.title.clone(),
                None => return format!("No favorite number {}", n),
            },
            Err(_) => target.to_string(),
        };

        if self.favorites.remove(&title) {
            "Removed from favorites".to_string()
        } else {
            format!("'{}' is not in your favorites", title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::SeededRandom;
    use crate::core::synthesizer::RecipeSynthesizer;
    use async_trait::async_trait;

    struct Failing;

    #[async_trait]
    impl RecipeGenerator for Failing {
        async fn generate(&self, _prompt: &str) -> Result<Recipe> {
            Err(RecipeError::UpstreamError {
                status: 500,
                message: "Failed to generate recipe".to_string(),
            })
        }
    }

    fn local_session() -> Session {
        Session::new(
            Box::new(RecipeSynthesizer::new(SeededRandom::new(1))),
            Box::new(SeededRandom::new(2)),
        )
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("manual chicken curry").unwrap(),
            Command::Generate(RequestMode::Manual("chicken curry".to_string()))
        );
        assert_eq!(Command::parse("time 20").unwrap(), Command::TimeLimit(Some(20)));
        assert_eq!(Command::parse("time any").unwrap(), Command::TimeLimit(None));
        assert_eq!(Command::parse("diet Any").unwrap(), Command::Diet(None));
        assert_eq!(Command::parse("  QUIT ").unwrap(), Command::Quit);
        assert!(Command::parse("remove").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn test_parse_errors_are_typed() {
        let err = Command::parse("time soon").unwrap_err();
        assert!(matches!(err, RecipeError::InvalidCommand { .. }));
        assert_eq!(err.user_friendly_message(), "'soon' is not a number of minutes");
    }

    #[tokio::test]
    async fn test_generate_errors_are_typed() {
        let mut failing = Session::new(Box::new(Failing), Box::new(SeededRandom::new(2)));
        let err = failing.generate(RequestMode::Random).await.unwrap_err();
        assert!(matches!(err, RecipeError::UpstreamError { status: 500, .. }));

        let mut session = local_session();
        let err = session
            .generate(RequestMode::Pantry(String::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, RecipeError::ComposeError { .. }));
    }

    #[tokio::test]
    async fn test_generate_save_and_remove() {
        let mut session = local_session();

        let reply = session
            .execute(Command::Generate(RequestMode::Manual("garlic bread".to_string())))
            .await;
        let Reply::Text(text) = reply else {
            panic!("expected text reply");
        };
        assert!(text.contains("⏱️ 10-15 minutes | 👥 4 servings"));

        assert_eq!(
            session.execute(Command::Save).await,
            Reply::Text("Saved to favorites!".to_string())
        );
        assert_eq!(
            session.execute(Command::Save).await,
            Reply::Text("This recipe is already in your favorites.".to_string())
        );
        assert_eq!(session.favorites().len(), 1);

        assert_eq!(
            session.execute(Command::Remove("1".to_string())).await,
            Reply::Text("Removed from favorites".to_string())
        );
        assert!(session.favorites().is_empty());
    }

    #[tokio::test]
    async fn test_filters_reach_the_prompt() {
        let mut session = local_session();
        session.execute(Command::TimeLimit(Some(30))).await;
        session.execute(Command::Diet(Some("vegan".to_string()))).await;

        let recipe = session
            .generate(RequestMode::Pantry("tofu, broccoli".to_string()))
            .await
            .unwrap()
            .clone();
        assert_eq!(recipe.cooking_time, "25-30 minutes");
        assert!(recipe.dietary_info.contains(&crate::domain::model::DietaryTag::Vegan));
        assert_eq!(recipe.ingredients[0], "14 oz (400g) firm tofu, cubed");
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_recipe() {
        let mut session = local_session();
        session.generate(RequestMode::Random).await.unwrap();
        let before = session.current().cloned();

        let mut failing = Session::new(Box::new(Failing), Box::new(SeededRandom::new(2)));
        assert_eq!(
            failing.execute(Command::Generate(RequestMode::Random)).await,
            Reply::Text("Failed to generate recipe. Please try again.".to_string())
        );
        assert!(failing.current().is_none());

        assert_eq!(
            session
                .execute(Command::Generate(RequestMode::Manual(" ".to_string())))
                .await,
            Reply::Text("Please enter the recipe you want".to_string())
        );
        assert_eq!(session.current().cloned(), before);
    }

    #[tokio::test]
    async fn test_copy_and_share_need_a_recipe() {
        let mut session = local_session();
        assert_eq!(
            session.execute(Command::Share).await,
            Reply::Text("Generate a recipe first".to_string())
        );
        assert_eq!(session.execute(Command::Quit).await, Reply::Quit);
    }
}
