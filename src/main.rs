use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod pack;

use config::Config;

/// `RUST_LOG` directives when set and valid, `info` otherwise.
fn env_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env();
    info!(
        input_dir = %config.input_dir.display(),
        output = %config.output_path().display(),
        "building question pack"
    );

    pack::build_pack(&config)?;
    Ok(())
}
