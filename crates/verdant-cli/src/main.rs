//! `verdant`: generate a biome grid and print it with its resource statistics.
//!
//! Settings come from `config.ron` and can be overridden via CLI flags, e.g.
//! `verdant --width 60 --height 20 --seed 42 --inspect 10,5 --channel height`.

mod report;

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use verdant_config::{CliArgs, Config};
use verdant_grid::{CancelToken, GenerationRequest, regenerate};
use verdant_noise::Channel;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(verdant_config::default_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    verdant_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", error_chain(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// `err` followed by each cause its own message does not already include.
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn run(config: &Config, args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let channel = args
        .channel
        .as_deref()
        .map(str::parse::<Channel>)
        .transpose()?;
    let catalog = Arc::new(verdant_catalog::load_catalog(&config.catalog.path)?);

    let request = GenerationRequest {
        width: config.grid.width,
        height: config.grid.height,
        scale: config.grid.scale,
        seed: config.generation.seed,
    };
    let generation = regenerate(&request, catalog, &CancelToken::new())?;
    info!(
        master = generation.seeds.master,
        height = generation.seeds.height,
        humidity = generation.seeds.humidity,
        temperature = generation.seeds.temperature,
        mystical = generation.seeds.mystical,
        "seeds used (repeat with --seed {})",
        generation.seeds.master
    );

    print!("{}", report::render_map(&generation.grid));
    println!();
    println!("Legend:");
    print!("{}", report::render_legend(&generation.grid));
    println!();
    println!("Resources:");
    print!("{}", report::render_stats(&generation.stats));

    if let Some(channel) = channel {
        println!();
        println!("Channel {channel} (low ' ' to high '@'):");
        print!("{}", report::render_channel(&generation.grid, channel));
    }

    if let Some((x, y)) = args.inspect {
        println!();
        match report::describe_cell(&generation.grid, x, y) {
            Some(details) => print!("{details}"),
            None => {
                return Err(format!(
                    "cell ({x}, {y}) is outside the {}x{} grid",
                    generation.grid.width(),
                    generation.grid.height()
                )
                .into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::path::Path;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("generation failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_embedded_cause_logged_once() {
        let err = verdant_catalog::load_catalog(Path::new("/nonexistent/verdant/biomes.json"))
            .unwrap_err();
        let cause = err.source().unwrap().to_string();
        let message = error_chain(&err);
        assert_eq!(message, err.to_string());
        assert_eq!(message.matches(cause.as_str()).count(), 1);
    }

    #[test]
    fn test_invalid_record_cause_logged_once() {
        let json = r#"[{
            "name": "Glade",
            "height_min": 0.0, "height_max": 1.0,
            "humidity_min": 0.0, "humidity_max": 1.0,
            "temperature_min": 0.0, "temperature_max": 1.0,
            "mystical_min": 0.0, "mystical_max": 1.0,
            "resource_type": "herb", "resource_variant": "moss",
            "color": [10, 20, 300]
        }]"#;
        let err = verdant_catalog::parse_catalog(json).unwrap_err();
        let message = error_chain(&err);
        assert_eq!(message.matches("300").count(), 1);
        assert!(message.contains("Glade"));
    }

    #[test]
    fn test_separate_cause_appended() {
        let err = Outer(std::io::Error::other("disk on fire"));
        assert_eq!(error_chain(&err), "generation failed: disk on fire");
    }

    #[test]
    fn test_unknown_channel_fails_before_generation() {
        let args = CliArgs {
            channel: Some("altitude".to_owned()),
            ..CliArgs::default()
        };
        let err = run(&Config::default(), &args).unwrap_err();
        assert!(err.to_string().contains("unknown channel `altitude`"));
    }
}
