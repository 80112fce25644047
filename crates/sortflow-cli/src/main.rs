//! SortFlow CLI
//!
//! Cliente de consola del engine: imprime la traza de una corrida (texto o
//! JSON por línea), el calendario de reproducción, o reproduce la traza en
//! vivo respetando ese calendario.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, error};
use sortflow::config::{AppConfig, CONFIG};
use sortflow::generator::generate;
use sortflow::playback::{speed_label, PlaybackSchedule};
use sortflow::worker::{run_in_background, spawn_live_feed};
use sortflow::AppError;
use sortflow_core::{SortResult, Step};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sortflow")]
#[command(about = "Instrumented counting sort with a replayable step trace")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the engine and print every step
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Only print milestone steps
        #[arg(long)]
        milestones_only: bool,

        /// Print steps while they are produced instead of after the run
        #[arg(long)]
        live: bool,
    },

    /// Print the playback schedule for a run
    Schedule {
        #[command(flatten)]
        input: InputArgs,

        /// Playback speed (1..=10)
        #[arg(long)]
        speed: Option<u8>,
    },

    /// Replay the trace on the terminal, paced by the playback schedule
    Replay {
        #[command(flatten)]
        input: InputArgs,

        /// Playback speed (1..=10)
        #[arg(long)]
        speed: Option<u8>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Explicit input values (comma-separated)
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Option<Vec<i64>>,

    /// Size of the generated array when no values are given
    #[arg(long)]
    size: Option<usize>,

    /// Seed for the generated array
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl InputArgs {
    fn resolve(self, cfg: &AppConfig) -> Vec<i64> {
        if let Some(values) = self.values {
            return values;
        }
        let size = self.size.unwrap_or(cfg.generator.array_size);
        let seed = self.seed.or(cfg.generator.seed);
        generate(size, cfg.generator.value_min, cfg.generator.value_span, seed)
    }
}

fn render_step(step: &Step, format: Format) -> Result<String, AppError> {
    Ok(match format {
        Format::Json => serde_json::to_string(step).map_err(io::Error::from)?,
        Format::Text => format!("[{:>4}]{} {:<9} {:<45} cmp={:<4} acc={:<5} {:?}",
                                step.seq,
                                if step.is_milestone { "*" } else { " " },
                                format!("{:?}", step.phase),
                                step.description,
                                step.comparisons,
                                step.memory_accesses,
                                step.array_snapshot),
    })
}

fn render_summary(result: &SortResult, format: Format) -> Result<String, AppError> {
    Ok(match format {
        Format::Json => {
            let summary = serde_json::json!({
                "run_id": result.run_id,
                "final_array": result.final_array,
                "elapsed_time_ms": result.elapsed_time_ms,
                "comparisons": result.comparisons,
                "swaps": result.swaps,
                "memory_accesses": result.memory_accesses,
                "complexity_label": result.complexity_label,
                "step_count": result.steps.len(),
                "trace_fingerprint": result.trace_fingerprint(),
            });
            summary.to_string()
        }
        Format::Text => format!("{result}\nsorted: {:?}", result.final_array),
    })
}

async fn cmd_run(input: Vec<i64>, format: Format, milestones_only: bool, live: bool) -> Result<(), AppError> {
    let max_value = CONFIG.engine.max_value;
    let mut out = io::stdout().lock();

    let result = if live {
        let mut feed = spawn_live_feed(input, max_value, 64)?;
        while let Some(step) = feed.steps.recv().await {
            if !milestones_only || step.is_milestone {
                writeln!(out, "{}", render_step(&step, format)?)?;
            }
        }
        feed.result.await??
    } else {
        let result = run_in_background(input, max_value).await?;
        for step in result.steps.iter().filter(|s| !milestones_only || s.is_milestone) {
            writeln!(out, "{}", render_step(step, format)?)?;
        }
        result
    };

    writeln!(out, "{}", render_summary(&result, format)?)?;
    Ok(())
}

async fn cmd_schedule(input: Vec<i64>, speed: u8) -> Result<(), AppError> {
    let result = run_in_background(input, CONFIG.engine.max_value).await?;
    let schedule = PlaybackSchedule::build(&result.steps, speed);
    let mut out = io::stdout().lock();
    writeln!(out,
             "speed={} ({}) base_delay_ms={:.1} total_ms={:.1}",
             schedule.speed,
             speed_label(schedule.speed),
             schedule.base_delay_ms,
             schedule.total_duration_ms())?;
    for frame in schedule.iter_all() {
        writeln!(out, "{}", serde_json::to_string(frame).map_err(io::Error::from)?)?;
    }
    Ok(())
}

async fn cmd_replay(input: Vec<i64>, speed: u8) -> Result<(), AppError> {
    let result = run_in_background(input, CONFIG.engine.max_value).await?;
    let schedule = PlaybackSchedule::build(&result.steps, speed);
    debug!("replay:start steps={} total_ms={:.1}", result.steps.len(), schedule.total_duration_ms());

    let started = tokio::time::Instant::now();
    for frame in schedule.iter_all() {
        tokio::time::sleep_until(started + Duration::from_secs_f64(frame.at_ms / 1000.0)).await;
        let line = match frame.step_index.and_then(|k| result.steps.get(k)) {
            Some(step) => format!("{:>5.1}% {}", frame.progress * 100.0, render_step(step, Format::Text)?),
            None => format!("[done] {} completed, engine time {}ms", result.algorithm_name, result.elapsed_time_ms),
        };
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();

    let cli = Cli::parse();
    let cfg: &AppConfig = &CONFIG;
    let outcome = match cli.command {
        Commands::Run { input,
                        format,
                        milestones_only,
                        live, } => cmd_run(input.resolve(cfg), format, milestones_only, live).await,
        Commands::Schedule { input, speed } => cmd_schedule(input.resolve(cfg), speed.unwrap_or(cfg.playback.speed)).await,
        Commands::Replay { input, speed } => cmd_replay(input.resolve(cfg), speed.unwrap_or(cfg.playback.speed)).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("sortflow: {e}");
            if e.is_invalid_input() { ExitCode::from(2) } else { ExitCode::FAILURE }
        }
    }
}
