//! SAVANNA - CLI Entry Point
//!
//! Headless driver for the savanna world.

use clap::{Parser, Subcommand};
use savanna::policy::RandomPolicy;
use savanna::{Config, Session, SessionEvent, World};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "savanna")]
#[command(version)]
#[command(about = "Procedural savanna grid with a single gazelle")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless session with the random mover
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Simulated seconds to run
        #[arg(short, long, default_value = "120")]
        duration_secs: u64,

        /// Clock resolution in milliseconds
        #[arg(long, default_value = "100")]
        step_ms: u64,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a freshly generated map
    Map {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a freshly generated world as JSON
    Snapshot {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            duration_secs,
            step_ms,
            seed,
            quiet,
        } => run_session(&config, duration_secs, step_ms, seed, quiet),

        Commands::Map { config, seed } => print_map(&config, seed),

        Commands::Snapshot { config, seed } => print_snapshot(&config, seed),

        Commands::Init { output } => generate_config(output),
    }
}

/// Load the config (or defaults) and start logging at its level
fn setup(config_path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.log_level.as_str()),
    )
    .init();

    if config_path.exists() {
        log::info!("Loaded config from: {:?}", config_path);
    } else {
        log::info!("Using default configuration");
    }
    Ok(config)
}

fn build_world(config: Config, seed: Option<u64>) -> Result<World, Box<dyn std::error::Error>> {
    let world = match seed {
        Some(s) => World::new_with_seed(config, s)?,
        None => World::new(config)?,
    };
    Ok(world)
}

fn run_session(
    config_path: &Path,
    duration_secs: u64,
    step_ms: u64,
    seed: Option<u64>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = setup(config_path)?;
    let world = build_world(config, seed)?;
    let policy = match seed {
        Some(s) => RandomPolicy::with_seed(s.wrapping_add(1)),
        None => RandomPolicy::new(),
    };

    println!("World seed: {}", world.seed());
    let mut session = Session::new(world, Box::new(policy));

    let total = Duration::from_secs(duration_secs);
    let step = Duration::from_millis(step_ms.max(1));
    while session.clock() < total && session.is_active() {
        let remaining = total - session.clock();
        for event in session.advance(step.min(remaining)) {
            match event {
                SessionEvent::Moved(outcome) if !quiet => println!("{:?}", outcome),
                SessionEvent::Ended(status) => println!("Session ended: {:?}", status),
                _ => {}
            }
        }
    }

    let world = session.world();
    println!("\n{}", world.stats());
    println!("Thinking: {}", world.gazelle().thoughts);
    if !quiet {
        println!("\n{}", world.render_text());
    }
    Ok(())
}

fn print_map(config_path: &Path, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = setup(config_path)?;
    let world = build_world(config, seed)?;

    print!("{}", world.render_text());
    println!("\nSeed: {}", world.seed());
    print!("{}", world.stats());
    Ok(())
}

fn print_snapshot(config_path: &Path, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = setup(config_path)?;
    let world = build_world(config, seed)?;

    println!("{}", world.snapshot().to_json()?);
    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    config.save(&output)?;
    println!("Default configuration saved to: {:?}", output);
    Ok(())
}
