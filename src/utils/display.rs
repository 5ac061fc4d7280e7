//! Display and output formatting utilities

use crate::game_of_life::Grid;

/// Format boards for display
pub struct BoardFormatter;

impl BoardFormatter {
    /// Format a board in compact form, one glyph per cell
    pub fn format_grid_compact(grid: &Grid) -> String {
        grid.to_string()
    }

    /// Format a board with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..grid.dimension() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row_idx, row) in grid.rows().iter().enumerate() {
            output.push_str(&format!("{:2} ", row_idx));
            for &cell in row {
                output.push_str(if cell == 1 { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line header shown above each rendered generation
    pub fn format_generation_header(generation: u64, grid: &Grid) -> String {
        format!(
            "Generation {} ({}x{}, living: {})",
            generation,
            grid.dimension(),
            grid.dimension(),
            grid.living_count()
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
