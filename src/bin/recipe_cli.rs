use anyhow::Context;
use clap::{Parser, ValueEnum};
use quick_recipe::app::session::{Command, Reply, Session, HELP};
use quick_recipe::core::composer::{Filters, RequestMode};
use quick_recipe::core::export::{clipboard_text, share_text};
use quick_recipe::utils::logger;
use quick_recipe::{ConfiguredRandom, RecipeClient, RecipeGenerator, RecipeSynthesizer};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Random,
    Manual,
    Pantry,
}

#[derive(Parser)]
#[command(name = "recipe-cli")]
#[command(about = "Ask for a recipe from the terminal")]
struct Args {
    /// How to ask for the recipe
    #[arg(long, value_enum, default_value = "random")]
    mode: Mode,

    /// Dish description (manual) or comma separated ingredients (pantry)
    #[arg(short, long, default_value = "")]
    text: String,

    /// Time limit in minutes
    #[arg(long)]
    time_limit: Option<u32>,

    /// Diet preference, e.g. vegetarian, vegan, keto
    #[arg(long)]
    diet: Option<String>,

    /// Effort level, e.g. minimal, moderate
    #[arg(long)]
    effort: Option<String>,

    /// Recipe server URL; recipes are generated locally when omitted
    #[arg(long)]
    server: Option<String>,

    /// Seed for reproducible picks
    #[arg(long)]
    seed: Option<u64>,

    /// Print the short share message instead of the full recipe
    #[arg(long)]
    share: bool,

    /// Start an interactive session with favorites
    #[arg(short, long)]
    interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn request_mode(&self) -> RequestMode {
        match self.mode {
            Mode::Random => RequestMode::Random,
            Mode::Manual => RequestMode::Manual(self.text.clone()),
            Mode::Pantry => RequestMode::Pantry(self.text.clone()),
        }
    }

    fn filters(&self) -> Filters {
        Filters {
            time_limit: self.time_limit,
            diet: self.diet.clone(),
            effort: self.effort.clone(),
        }
    }
}

fn build_generator(args: &Args) -> anyhow::Result<Box<dyn RecipeGenerator>> {
    match &args.server {
        Some(url) => {
            let client = RecipeClient::new(url)
                .with_context(|| format!("invalid server URL '{}'", url))?;
            tracing::info!("Using recipe server at {}", client.endpoint());
            Ok(Box::new(client))
        }
        None => Ok(Box::new(RecipeSynthesizer::new(ConfiguredRandom::from_seed(
            args.seed,
        )))),
    }
}

async fn run_interactive(mut session: Session) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(format!("{}\n\n> ", HELP).as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let output = match Command::parse(&line) {
            Ok(command) => match session.execute(command).await {
                Reply::Text(text) => text,
                Reply::Quit => break,
            },
            Err(e) => e.user_friendly_message(),
        };
        stdout.write_all(format!("{}\n\n> ", output).as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::debug!("Session ended with {} favorites", session.favorites().len());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(if args.verbose { "debug" } else { logger::DEFAULT_LEVEL });

    let generator = build_generator(&args)?;
    let random = Box::new(ConfiguredRandom::from_seed(args.seed));
    let mut session = Session::new(generator, random).with_filters(args.filters());

    if args.interactive {
        return run_interactive(session).await;
    }

    match session.generate(args.request_mode()).await {
        Ok(recipe) => {
            if args.share {
                println!("{}", share_text(recipe));
            } else {
                println!("{}", clipboard_text(recipe));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
