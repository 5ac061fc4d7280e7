//! Renderers consume read-only views of the engine after seeding and after each step

use crate::game_of_life::LifeEngine;
use crate::utils::BoardFormatter;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

pub trait Renderer {
    fn render(&mut self, engine: &LifeEngine) -> Result<()>;
}

/// Draws the board as block glyphs, one frame per generation
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear_screen: bool,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout(clear_screen: bool) -> Self {
        Self::new(std::io::stdout(), clear_screen)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, engine: &LifeEngine) -> Result<()> {
        let board = engine.board()?;

        if self.clear_screen {
            // Clear and home the cursor
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        writeln!(
            self.out,
            "{}",
            BoardFormatter::format_generation_header(engine.generation(), board)
        )?;
        write!(self.out, "{}", BoardFormatter::format_grid_compact(board))?;
        self.out.flush().context("Failed to flush terminal output")
    }
}

#[derive(Debug, Serialize)]
struct Frame {
    generation: u64,
    living: usize,
    cells: Vec<Vec<u8>>,
}

/// Emits one JSON object per generation, newline-delimited
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl JsonRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, engine: &LifeEngine) -> Result<()> {
        let frame = Frame {
            generation: engine.generation(),
            living: engine.living_count()?,
            cells: engine.snapshot()?,
        };
        serde_json::to_writer(&mut self.out, &frame).context("Failed to serialize frame")?;
        writeln!(self.out)?;
        Ok(())
    }
}
