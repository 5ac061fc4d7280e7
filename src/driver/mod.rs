//! Drives the simulation forward by repeatedly calling the engine's `step()`,
//! rendering between steps.

pub mod renderer;

pub use renderer::{JsonRenderer, Renderer, TerminalRenderer};

use crate::config::Settings;
use crate::game_of_life::{load_grid_from_file, LifeEngine};
use anyhow::{Context, Result};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    BoardEmpty,
}

/// Outcome of a finished run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub generations: u64,
    pub final_living: usize,
    pub elapsed: Duration,
    pub stop_reason: StopReason,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.stop_reason {
            StopReason::GenerationLimit => "generation limit reached",
            StopReason::BoardEmpty => "board died out",
        };
        write!(
            f,
            "Ran {} generation(s) in {:.3}s, {} living cell(s), {}",
            self.generations,
            self.elapsed.as_secs_f64(),
            self.final_living,
            reason
        )
    }
}

/// Fixed-interval run loop. Without a generation limit it runs until the
/// process is stopped (or the board empties, when asked to stop there).
#[derive(Debug, Clone)]
pub struct Driver {
    pub interval: Duration,
    pub max_generations: Option<u64>,
    pub stop_when_empty: bool,
}

impl Driver {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_generations: None,
            stop_when_empty: false,
        }
    }

    pub fn with_max_generations(mut self, max_generations: u64) -> Self {
        self.max_generations = Some(max_generations);
        self
    }

    pub fn stop_when_empty(mut self, stop: bool) -> Self {
        self.stop_when_empty = stop;
        self
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            interval: Duration::from_millis(settings.run.interval_ms),
            max_generations: settings.run.max_generations,
            stop_when_empty: settings.run.stop_when_empty,
        }
    }

    /// Render the current board, then step and render until a stop condition holds
    pub fn run(&self, engine: &mut LifeEngine, renderer: &mut dyn Renderer) -> Result<RunSummary> {
        let start = Instant::now();
        let start_generation = engine.generation();

        info!(
            dimension = ?engine.dimension(),
            living = engine.living_count()?,
            interval = ?self.interval,
            max_generations = ?self.max_generations,
            "starting simulation"
        );

        renderer.render(engine).context("Failed to render initial board")?;

        let stop_reason = loop {
            let ran = engine.generation() - start_generation;
            if self.max_generations.is_some_and(|max| ran >= max) {
                break StopReason::GenerationLimit;
            }
            if self.stop_when_empty && engine.board()?.is_empty() {
                break StopReason::BoardEmpty;
            }

            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }

            engine.step()?;
            renderer
                .render(engine)
                .with_context(|| format!("Failed to render generation {}", engine.generation()))?;
        };

        let summary = RunSummary {
            generations: engine.generation() - start_generation,
            final_living: engine.living_count()?,
            elapsed: start.elapsed(),
            stop_reason,
        };
        info!(
            generations = summary.generations,
            living = summary.final_living,
            reason = ?summary.stop_reason,
            "simulation finished"
        );
        Ok(summary)
    }
}

/// Build an engine from settings: either load the pattern file, or build an
/// empty board and seed it randomly.
pub fn build_engine(settings: &Settings) -> Result<LifeEngine> {
    let mut engine = match settings.board.seed {
        Some(seed) => LifeEngine::with_seed(seed),
        None => LifeEngine::new(),
    };

    match settings.board.pattern_file {
        Some(ref pattern) => {
            let grid = load_grid_from_file(pattern)?;
            engine.load_board(grid);
        }
        None => {
            engine
                .build_empty_board(settings.board.dimension)
                .context("Failed to build board")?;
            engine
                .set_initial_state(settings.board.alive_cells)
                .context("Failed to seed board")?;
        }
    }

    Ok(engine)
}

/// Build, seed and drive a game in one call
pub fn run_game(settings: &Settings, renderer: &mut dyn Renderer) -> Result<RunSummary> {
    let mut engine = build_engine(settings)?;
    Driver::from_settings(settings).run(&mut engine, renderer)
}
