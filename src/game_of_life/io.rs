//! File I/O operations for boards

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a board from a text file
/// Format: each line is a row, '1' for alive cells and '0' for dead cells
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read board file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse board from file: {}", path.as_ref().display()))
}

/// Parse a board from its text representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Board file is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(0),
                '1' => row.push(1),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Ok(Grid::from_rows(rows)?)
}

/// Save a board to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write board to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a board to its text representation
pub fn grid_to_string(grid: &Grid) -> String {
    let dimension = grid.dimension();
    let mut result = String::with_capacity(dimension * (dimension + 1));

    for row in grid.rows() {
        result.extend(row.iter().map(|&cell| if cell == 1 { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Write a few well-known patterns as example board files
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let patterns = [
        // Glider
        ("glider.txt", "01000000\n00100000\n11100000\n00000000\n00000000\n00000000\n00000000\n00000000\n"),
        // Blinker (oscillator, period 2)
        ("blinker.txt", "00000\n00000\n01110\n00000\n00000\n"),
        // Block (still life)
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        // Beacon (oscillator, period 2)
        ("beacon.txt", "000000\n011000\n011000\n000110\n000110\n000000\n"),
    ];

    for (name, content) in patterns {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
