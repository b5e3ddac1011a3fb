#![deny(unsafe_code)]
//! CLI binary for the random-dot-motion stimulus.
//!
//! Subcommands:
//! - `render` run N frames headless and write the last one as a PNG
//! - `record` run N frames and write each one to a numbered PNG
//! - `schema` print the configuration defaults and schema
//! - `watch` animate the stimulus in a window (feature `window`)

mod error;
#[cfg(feature = "window")]
mod window;

use clap::{Parser, Subcommand};
use error::CliError;
use log::{info, LevelFilter};
use rdm_core::Config;
use rdm_task::snapshot::{self, PngSequence};
use rdm_task::Task;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "rdm", about = "Random dot motion stimulus CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// JSON file holding configuration options.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Configuration options as a JSON object; overrides --config.
    #[arg(long, global = true, default_value = "{}")]
    params: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run N frames and write the final frame as a PNG.
    Render {
        /// Number of frames to advance.
        #[arg(short, long, default_value_t = 1)]
        frames: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Run N frames and write every frame as frame_NNNNN.png.
    Record {
        #[arg(short, long, default_value_t = 30)]
        frames: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Directory receiving the PNG sequence.
        #[arg(short, long, default_value = "frames")]
        out_dir: PathBuf,
    },
    /// Print configuration defaults and the option schema.
    Schema,
    /// Show the stimulus in a window until Escape is pressed.
    #[cfg(feature = "window")]
    Watch {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Target frame rate.
        #[arg(long, default_value_t = rdm_task::DEFAULT_FPS)]
        fps: u32,

        /// Stop after this many frames.
        #[arg(short, long)]
        frames: Option<usize>,
    },
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

/// Defaults, then the `--config` file, then `--params` on top.
fn load_config(path: Option<&Path>, params: &str) -> Result<Config, CliError> {
    let base = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid config file {}: {e}", path.display())))?;
            Config::from_json(&value)?
        }
        None => Config::default(),
    };
    let overrides: serde_json::Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    Ok(base.with_overrides(&overrides)?)
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref(), &cli.params)?;

    match cli.command {
        Command::Schema => {
            let info = serde_json::json!({
                "defaults": Config::default().to_json(),
                "effective": config.to_json(),
                "schema": Config::schema(),
            });
            print_json(&info)?;
        }
        Command::Render {
            frames,
            seed,
            output,
        } => {
            let mut task = Task::headless(config, seed)?;
            task.run(frames)?;
            snapshot::write_png(&task.get_frame(), &output)?;
            info!("rendered {frames} frames to {}", output.display());

            let field = task.field();
            if cli.json {
                print_json(&serde_json::json!({
                    "frames": field.tick(),
                    "seed": seed,
                    "display_size": field.display_size(),
                    "recycles": field.recycle_count(),
                    "output": output.display().to_string(),
                }))?;
            } else {
                let size = field.display_size();
                eprintln!(
                    "rendered {} frames ({size}x{size} px, seed {seed}) -> {}",
                    field.tick(),
                    output.display()
                );
            }
        }
        Command::Record {
            frames,
            seed,
            out_dir,
        } => {
            let sequence = PngSequence::new(&out_dir)?;
            let mut task = Task::headless(config, seed)?.with_display(Box::new(sequence));
            task.run(frames)?;
            task.quit()?;

            if cli.json {
                print_json(&serde_json::json!({
                    "frames": task.presented(),
                    "seed": seed,
                    "recycles": task.field().recycle_count(),
                    "out_dir": out_dir.display().to_string(),
                }))?;
            } else {
                eprintln!(
                    "recorded {} frames (seed {seed}) -> {}",
                    task.presented(),
                    out_dir.display()
                );
            }
        }
        #[cfg(feature = "window")]
        Command::Watch { seed, fps, frames } => {
            let summary = window::watch(config, seed, fps, frames)?;
            if cli.json {
                print_json(&serde_json::json!({
                    "frames": summary.frames,
                    "recycles": summary.recycles,
                    "seed": seed,
                }))?;
            } else {
                eprintln!("watched {} frames (seed {seed})", summary.frames);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(parse_level(&cli.log_level))
        .parse_default_env()
        .init();

    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
