pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "quick-recipe")]
#[command(about = "Recipe suggestion server")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to bind, overrides [server] bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on, overrides [server] port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Seed for reproducible titles, overrides [generation] seed
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the optional config file and applies command line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(seed) = self.seed {
            config.generation.get_or_insert_with(Default::default).seed = Some(seed);
        }
        if self.verbose || self.json_logs {
            let logging = config.logging.get_or_insert_with(Default::default);
            if self.verbose {
                logging.level = Some("debug".to_string());
            }
            if self.json_logs {
                logging.json = Some(true);
            }
        }

        config.validate()?;
        Ok(config)
    }
}
