//! emojicon CLI - emoji to icon-file converter
//!
//! Usage: emojicon --emoji <GLYPH|:shortcode:> [--size <PX>] [--output <FILE>]
//!
//! Fetches the Twemoji artwork for an emoji and writes it as SVG
//! (verbatim) or PNG (rasterized to a square canvas).

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use emojicon::{Pipeline, RunConfig, RunRequest, ShortcodeResolver};

/// emojicon - fetch Twemoji artwork for an emoji or :shortcode:
#[derive(Parser, Debug)]
#[command(name = "emojicon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emoji glyph or :shortcode: to fetch
    #[arg(short, long)]
    emoji: Option<String>,

    /// Raster size in pixels (requires a .png destination)
    #[arg(short, long)]
    size: Option<u32>,

    /// Output file (defaults to icon.svg, or icon<SIZE>.png with --size)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_config = load_file_config(cli.config.as_deref())?;

    // Precedence: CLI flags, then config file, then environment.
    let config = RunConfig {
        size: cli.size,
        emoji: cli.emoji,
        output: cli.output,
    }
    .merged_over(file_config)
    .merged_over(RunConfig::from_env());

    let request = RunRequest {
        emoji: config.emoji.unwrap_or_default(),
        size: config.size.unwrap_or(0),
        output: config.output,
    };

    let pipeline = Pipeline::new(ShortcodeResolver::builtin());
    let report = pipeline.run(&request)?;

    if cli.json {
        let output = serde_json::json!({
            "event": "convert",
            "emoji": report.glyph,
            "code_points": report.key,
            "format": report.format.as_str(),
            "output": report.output.display().to_string(),
            "bytes": report.bytes_written,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!(
            "✓ {} ({}) → {} ({} bytes)",
            report.glyph,
            report.key,
            report.output.display(),
            report.bytes_written
        );
    }

    Ok(())
}

/// Load the config-file layer: an explicit --config path must exist and
/// parse; the default user config is optional.
fn load_file_config(explicit: Option<&std::path::Path>) -> Result<RunConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match RunConfig::user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(RunConfig::default()),
        },
    };

    let (config, warnings) = RunConfig::load_with_warnings(&path)?;
    for warning in &warnings {
        log::warn!(
            "unknown config key '{}' in {}",
            warning.key,
            warning.file.display()
        );
    }
    Ok(config)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
