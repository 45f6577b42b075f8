use clap::Parser;
use quick_recipe::adapters::http;
use quick_recipe::utils::error::ErrorSeverity;
use quick_recipe::utils::logger;
use quick_recipe::{CliConfig, ConfiguredRandom, RecipeSynthesizer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            let exit_code = match e.severity() {
                ErrorSeverity::Critical => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    };

    logger::init_logger(&config.log_level(), config.json_logs());

    tracing::info!("Starting quick-recipe server");
    tracing::debug!("Resolved config: {:?}", config);

    let seed = config.seed();
    if let Some(seed) = seed {
        tracing::info!("🎲 Using fixed seed {} for title generation", seed);
    }

    let synthesizer = Arc::new(RecipeSynthesizer::new(ConfiguredRandom::from_seed(seed)));
    let app = http::router(synthesizer);

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    tracing::info!("POST {} to generate a recipe", http::GENERATE_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
