use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lay_config::redact::fingerprint;
use lay_config::{ConfigRecord, Settings};

/// Normalize a lay config record
#[derive(Parser, Debug)]
#[command(name = "lay-config")]
#[command(about = "Normalize a lay config record (API keys and model) and print it as JSON")]
struct Args {
    /// Config as JSON text
    source: Option<String>,

    /// Read the config JSON from a file when no SOURCE is given
    #[arg(short, long, env = "LAY_CONFIG_FILE")]
    file: Option<PathBuf>,

    /// Apply backend defaults (legacy key, default model)
    #[arg(short, long, env = "LAY_CONFIG_RESOLVE")]
    resolve: bool,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,
}

/// Positional JSON wins over `--file`, which wins over stdin.
fn read_source(args: &Args) -> Result<String> {
    if let Some(ref text) = args.source {
        return Ok(text.clone());
    }
    if let Some(ref path) = args.file {
        info!("Reading config from {}", path.display());
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read config from stdin")?;
    Ok(text)
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lay_config=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let text = read_source(&args)?;

    let record = if args.resolve {
        let settings = Settings::resolve(text.as_str())?;
        info!("Model: {}", settings.model);
        info!("Provider: {}", settings.provider());
        match settings.active_key() {
            Ok(key) => info!("Active key: {}", fingerprint(key)),
            Err(e) => info!("{}", e),
        }
        ConfigRecord::from(settings)
    } else {
        ConfigRecord::new(text)?
    };

    let out = if args.pretty {
        record.to_json_pretty()?
    } else {
        record.to_json()?
    };
    println!("{}", out);

    Ok(())
}
