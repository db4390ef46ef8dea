use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand_core::{OsRng, RngCore};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use scribble_field::{write_svg, Lcg32, Result, ScribbleConfig, ScribbleField, Stroke};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

/// Generate a seeded field of scribble strokes.
#[derive(Debug, Parser)]
#[command(name = "scribble-field", version)]
struct Args {
    /// Seed for the generator; picked at random when omitted
    #[arg(long)]
    seed: Option<u32>,

    /// Number of regular strokes
    #[arg(long)]
    count: Option<u32>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// TOML file with generator settings; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file. SVG defaults to ./out/scribbles.svg, JSON to stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    seed: u32,
    config: &'a ScribbleConfig,
    strokes: &'a [Stroke],
}

fn resolve_config(args: &Args) -> Result<ScribbleConfig> {
    let mut config = match &args.config {
        Some(path) => ScribbleConfig::load(path)?,
        None => ScribbleConfig::default(),
    };
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;
    let seed = args.seed.unwrap_or_else(|| OsRng.next_u32());
    info!(seed, count = config.count, "generating scribbles");

    let strokes = ScribbleField::new(config.clone(), Lcg32::new(seed))?.generate();

    match args.format {
        Format::Svg => {
            let output = args
                .output
                .unwrap_or_else(|| PathBuf::from("./out/scribbles.svg"));
            write_svg(&output, config.width, config.height, &strokes)?;
            info!(path = %output.display(), strokes = strokes.len(), "wrote svg");
        }
        Format::Json => {
            let report = Report {
                seed,
                config: &config,
                strokes: &strokes,
            };
            let json = serde_json::to_string_pretty(&report)?;
            match args.output {
                Some(output) => {
                    fs::write(&output, json)?;
                    info!(path = %output.display(), "wrote json");
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    writeln!(stdout, "{}", json)?;
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
