use ferrous_route_domain::Config;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
///
/// Output goes to stderr so command results on stdout stay machine readable.
pub fn init_logging(config: &Config) {
    let (level, invalid) = match config.logging.level.parse::<LevelFilter>() {
        Ok(level) => (level, false),
        Err(_) => (LevelFilter::INFO, true),
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    if invalid {
        tracing::warn!(
            level = %config.logging.level,
            "Unknown log level in configuration, using info"
        );
    }
}
