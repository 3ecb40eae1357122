use anyhow::{Context, Result};
use clap::Parser;
use publist::config::{find_config_file, load_config, Config};
use publist::pipeline::{fetch_and_render, render_file};
use publist::ArxivSource;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// publist - Render an author's arXiv publications as a static HTML page
#[derive(Parser, Debug)]
#[command(name = "publist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render an author's arXiv publications as a static HTML page", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read the Atom feed from a file instead of querying arXiv
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    // Logs go to stderr; stdout carries the page.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("publist={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = resolve_config(&cli)?;

    if cli.print_config {
        let text = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
        print!("{}", text);
        return Ok(());
    }

    let page = match &cli.input {
        Some(path) => render_file(path, &config)
            .with_context(|| format!("Failed to build publication list from {}", path.display()))?,
        None => {
            let source =
                ArxivSource::new(&config.query).context("Failed to initialize arXiv source")?;
            fetch_and_render(&source, &config).context("Failed to build publication list")?
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(page.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write page to stdout")?;

    Ok(())
}

/// Load configuration from `--config`, a default location, or built-in defaults
fn resolve_config(cli: &Cli) -> Result<Config> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => find_config_file(),
    };

    if let Some(path) = &path {
        tracing::info!("Using config file: {}", path.display());
    }

    load_config(path.as_deref()).context("Failed to load configuration")
}
