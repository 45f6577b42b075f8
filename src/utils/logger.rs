use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";

/// Filter used when `RUST_LOG` is unset. Debug and trace keep other crates at info.
pub fn filter_directive(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    match level.as_str() {
        "debug" | "trace" => format!("quick_recipe={},info", level),
        _ => format!("quick_recipe={}", level),
    }
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(level)))
}

pub fn init_cli_logger(level: &str) {
    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Structured output for log collectors in front of the server.
pub fn init_json_logger(level: &str) {
    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

pub fn init_logger(level: &str, json: bool) {
    if json {
        init_json_logger(level);
    } else {
        init_cli_logger(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_follows_level() {
        assert_eq!(filter_directive("warn"), "quick_recipe=warn");
        assert_eq!(filter_directive("ERROR"), "quick_recipe=error");
        assert_eq!(filter_directive(DEFAULT_LEVEL), "quick_recipe=info");
        assert_eq!(filter_directive("debug"), "quick_recipe=debug,info");
    }
}
