//! Command-line arguments for the `verdant` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Verdant biome grid generator.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "verdant", about = "Generate and classify a biome grid")]
pub struct CliArgs {
    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<usize>,

    /// Noise scale.
    #[arg(long)]
    pub scale: Option<f64>,

    /// Master seed for a reproducible grid.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the JSON biome catalog.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print details for the cell at X,Y.
    #[arg(long, value_name = "X,Y", value_parser = parse_cell)]
    pub inspect: Option<(usize, usize)>,

    /// Also print a shaded map of one raw noise channel.
    #[arg(long, value_parser = ["height", "humidity", "temperature", "mystical"])]
    pub channel: Option<String>,
}

/// Parse an `X,Y` cell coordinate.
pub fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{s}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid coordinate `{part}`: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.grid.width = w;
        }
        if let Some(h) = args.height {
            self.grid.height = h;
        }
        if let Some(scale) = args.scale {
            self.grid.scale = scale;
        }
        if let Some(seed) = args.seed {
            self.generation.seed = Some(seed);
        }
        if let Some(ref path) = args.catalog {
            self.catalog.path = path.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
