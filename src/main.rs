//! Command line entry point for the Game of Life simulation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conway_life::{
    config::{CliOverrides, OutputFormat, Settings},
    driver::{build_engine, Driver, JsonRenderer, Renderer, TerminalRenderer},
    game_of_life::{create_example_grids, load_grid_from_file, save_grid_to_file, GameOfLifeRules},
    utils::{BoardFormatter, ColorOutput},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "conway_life")]
#[command(about = "Conway's Game of Life simulation")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose (debug level) logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a board and run the simulation at a fixed interval
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board side length (overrides config)
        #[arg(short, long)]
        dimension: Option<usize>,

        /// Number of cells seeded alive (overrides config)
        #[arg(short, long)]
        alive: Option<usize>,

        /// RNG seed for reproducible runs (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Start from a board file instead of random seeding
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Evolve a board file and report the result
    Step {
        /// Board file to evolve
        #[arg(short, long)]
        pattern: PathBuf,

        /// Number of generations
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Save the evolved board to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            dimension,
            alive,
            seed,
            interval_ms,
            generations,
            pattern,
            format,
        } => {
            let overrides = CliOverrides {
                dimension,
                alive_cells: alive,
                seed,
                pattern_file: pattern,
                interval_ms,
                max_generations: generations,
                format,
            };
            run_command(config, overrides)
        }
        Commands::Step { pattern, generations, output } => {
            step_command(pattern, generations, output)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

/// Logs go to stderr so they never interleave with boards drawn on stdout
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    let mut engine = build_engine(&settings)?;
    let mut renderer: Box<dyn Renderer> = match settings.output.format {
        OutputFormat::Text => Box::new(TerminalRenderer::stdout(settings.output.clear_screen)),
        OutputFormat::Json => Box::new(JsonRenderer::stdout()),
    };

    let summary = Driver::from_settings(&settings).run(&mut engine, renderer.as_mut())?;

    if settings.output.format == OutputFormat::Text {
        println!("{}", ColorOutput::success(&summary.to_string()));
    }

    Ok(())
}

fn step_command(pattern: PathBuf, generations: usize, output: Option<PathBuf>) -> Result<()> {
    let start = load_grid_from_file(&pattern)
        .with_context(|| format!("Failed to load board from {}", pattern.display()))?;

    let evolved = GameOfLifeRules::evolve_generations(start.clone(), generations);

    println!("{}", ColorOutput::info(&format!("Initial board ({}):", pattern.display())));
    println!("{}", BoardFormatter::format_grid_with_coords(&start));
    println!("{}", ColorOutput::info(&format!("After {} generation(s):", generations)));
    println!("{}", BoardFormatter::format_grid_with_coords(&evolved));

    println!("Living cells: {} -> {}", start.living_count(), evolved.living_count());
    if evolved.is_empty() {
        println!("{}", ColorOutput::warning("Type: Extinct (no living cells left)"));
    } else {
        match GameOfLifeRules::oscillation_period(&evolved, 8) {
            Some(1) => println!("Type: Still Life"),
            Some(period) => println!("Type: Oscillator (period {})", period),
            None => println!("Type: Other"),
        }
    }

    if let Some(path) = output {
        save_grid_to_file(&evolved, &path)?;
        println!("{}", ColorOutput::success(&format!("Saved to {}", path.display())));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_grids(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    // A short, reproducible run that starts from the glider
    let mut glider_config = Settings::default();
    glider_config.board.pattern_file = Some(PathBuf::from("patterns/glider.txt"));
    glider_config.run.max_generations = Some(24);
    glider_config.run.interval_ms = 200;
    glider_config.to_file(&config_dir.join("glider.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}
