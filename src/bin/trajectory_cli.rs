use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use trajectory_engine::{
    sample_trajectory, scale_to_viewport, summarize, FlightSummary, LaunchParameters,
    TrajectorySample, Viewport,
};

#[derive(Parser)]
#[command(name = "trajectory")]
#[command(version = "0.1.0")]
#[command(about = "Projectile trajectory calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a trajectory and print it
    Sample {
        /// Initial velocity (m/s)
        #[arg(short = 'v', long)]
        velocity: f64,

        /// Launch angle (degrees, exclusive 0-90)
        #[arg(short = 'a', long)]
        angle: f64,

        /// Time step between samples (seconds)
        #[arg(long, default_value = "0.1")]
        dt: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Full output (show all trajectory points)
        #[arg(long)]
        full: bool,
    },

    /// Emit screen-space animation frames for a trajectory
    Frames {
        /// Initial velocity (m/s)
        #[arg(short = 'v', long)]
        velocity: f64,

        /// Launch angle (degrees, exclusive 0-90)
        #[arg(short = 'a', long)]
        angle: f64,

        /// Time step between frames (seconds)
        #[arg(long, default_value = "0.1")]
        dt: f64,

        /// Viewport width (pixels)
        #[arg(long, default_value = "800.0")]
        width: f64,

        /// Viewport height (pixels)
        #[arg(long, default_value = "450.0")]
        height: f64,

        /// Viewport margin (pixels)
        #[arg(long, default_value = "75.0")]
        margin: f64,
    },

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

#[derive(Debug, Serialize)]
struct SampleReport<'a> {
    summary: FlightSummary,
    trajectory: &'a [TrajectorySample],
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample {
            velocity,
            angle,
            dt,
            output,
            full,
        } => {
            let params = validate_args(velocity, angle, dt)?;
            let samples = sample_trajectory(&params, dt);
            display_samples(&samples, output, full)?;
        }

        Commands::Frames {
            velocity,
            angle,
            dt,
            width,
            height,
            margin,
        } => {
            let params = validate_args(velocity, angle, dt)?;
            let samples = sample_trajectory(&params, dt);
            let viewport = Viewport {
                width,
                height,
                margin,
            };
            let frames = scale_to_viewport(&samples, &viewport);

            println!("frame,time,screen_x,screen_y");
            for (i, (sample, point)) in samples.iter().zip(&frames).enumerate() {
                println!("{},{:.3},{:.2},{:.2}", i, sample.time_s, point.x, point.y);
            }
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      TRAJECTORY ENGINE v0.1.0          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Thrown-body trajectory sampler.        ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Fixed-step trajectory sampling       ║");
            println!("║ • Flight summary statistics            ║");
            println!("║ • Screen-space frame scaling           ║");
            println!("║ • Multiple output formats              ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn validate_args(velocity: f64, angle: f64, dt: f64) -> Result<LaunchParameters, Box<dyn Error>> {
    if dt <= 0.0 {
        return Err(format!("time step must be positive, got {}", dt).into());
    }
    let params = LaunchParameters::validated(velocity, angle).map_err(|e| {
        eprintln!("Invalid input: {}", e);
        e
    })?;
    Ok(params)
}

fn display_samples(
    samples: &[TrajectorySample],
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    let summary = summarize(samples);

    match format {
        OutputFormat::Json => {
            let report = SampleReport {
                summary,
                trajectory: samples,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        OutputFormat::Csv => {
            println!("time,x,y");
            for s in samples {
                println!("{:.3},{:.2},{:.2}", s.time_s, s.x_m, s.y_m);
            }
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         TRAJECTORY RESULTS             ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Max Range:         {:>8.2} m          ║", summary.max_range_m);
            println!("║ Max Height:        {:>8.2} m          ║", summary.max_height_m);
            println!("║ Time of Flight:    {:>8.3} s          ║", summary.time_of_flight_s);
            println!("║ Samples:           {:>8}            ║", summary.samples);
            println!("╚════════════════════════════════════════╝");

            let shown: Vec<&TrajectorySample> = if full || samples.len() <= 12 {
                samples.iter().collect()
            } else {
                // Thin to roughly ten rows, always keeping the last sample
                let step = (samples.len() / 10).max(1);
                samples
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| i % step == 0 || *i == samples.len() - 1)
                    .map(|(_, s)| s)
                    .collect()
            };

            println!("\nTrajectory Points:");
            println!("┌──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (m)   │  Y (m)   │");
            println!("├──────────┼──────────┼──────────┤");
            for s in shown {
                println!(
                    "│ {:>8.2} │ {:>8.2} │ {:>8.2} │",
                    s.time_s, s.x_m, s.y_m
                );
            }
            println!("└──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}
