//! Pursuit Testbed
//!
//! Drives the steering simulation headlessly at a fixed timestep and reports
//! whether the pursuer caught the target.
//!
//! Settings can be loaded from a TOML file.
//! Use `--config <path>` to specify a settings file.

use std::path::PathBuf;

use skychase_steering::Settings;
use testbed::{load_settings, PursuitScene, RunOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Pursuit Testbed ===\n");

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<PathBuf> = None;
    let mut max_frames: u64 = 3600;
    let mut dt: f32 = 1.0 / 60.0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    println!("Using settings file: {}\n", args[i + 1]);
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a path");
                    return Ok(());
                }
            }
            "--frames" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u64>() {
                        Ok(n) => max_frames = n,
                        Err(_) => {
                            eprintln!("Error: --frames requires a number");
                            return Ok(());
                        }
                    }
                    i += 1;
                } else {
                    eprintln!("Error: --frames requires a number");
                    return Ok(());
                }
            }
            "--dt" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<f32>() {
                        Ok(s) => dt = s,
                        Err(_) => {
                            eprintln!("Error: --dt requires a number of seconds");
                            return Ok(());
                        }
                    }
                    i += 1;
                } else {
                    eprintln!("Error: --dt requires a number of seconds");
                    return Ok(());
                }
            }
            "--help" | "-h" => {
                println!("Usage: testbed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --config PATH   Load settings from a TOML file");
                println!("  --frames N      Frame budget for the run (default 3600)");
                println!("  --dt SECONDS    Fixed timestep (default 1/60)");
                println!("  --help          Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Use --help for usage information");
                return Ok(());
            }
        }
        i += 1;
    }

    // Load settings, falling back to the default config location, then to
    // built-in defaults
    let settings = if let Some(path) = config_path {
        load_settings(&path)?
    } else {
        let default_config = PathBuf::from("crates/testbed/config/settings.toml");
        if default_config.exists() {
            println!("Loading default settings: {:?}\n", default_config);
            load_settings(&default_config)?
        } else {
            Settings::default()
        }
    };

    let mut scene = PursuitScene::new(settings);
    match scene.run(dt, max_frames) {
        RunOutcome::Caught { time, frames } => {
            println!("Target caught after {:.2}s ({} frames)", time, frames);
        }
        RunOutcome::TimedOut { frames } => {
            let gap = scene
                .simulation
                .pursuer
                .position()
                .distance(scene.simulation.target.position);
            println!(
                "No catch within {} frames; final gap {:.2} units",
                frames, gap
            );
        }
    }

    Ok(())
}
