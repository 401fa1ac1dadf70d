//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;
mod selection;

use anyhow::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::CliConfig::from_env();
    app::run(config)
}
