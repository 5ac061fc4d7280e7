//! Configuration settings for the Game of Life simulation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub dimension: usize,
    pub alive_cells: usize,
    /// Fixed RNG seed for reproducible seeding; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Start from this board file instead of random seeding
    #[serde(default)]
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub interval_ms: u64,
    #[serde(default)]
    pub max_generations: Option<u64>,
    #[serde(default)]
    pub stop_when_empty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                dimension: 70,
                alive_cells: 900,
                seed: None,
                pattern_file: None,
            },
            run: RunConfig {
                interval_ms: 100,
                max_generations: None,
                stop_when_empty: false,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                clear_screen: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Not validated here: callers merge CLI overrides first, then call [`Settings::validate`].
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if let Some(ref pattern) = self.board.pattern_file {
            if !pattern.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern.display());
            }
            // Dimension and seeding come from the pattern itself
            return Ok(());
        }

        if self.board.dimension == 0 {
            anyhow::bail!("Board dimension must be positive");
        }

        let area = self.board.dimension.saturating_mul(self.board.dimension);
        if self.board.alive_cells > area {
            anyhow::bail!(
                "Cannot seed {} alive cells on a {}x{} board ({} cells)",
                self.board.alive_cells,
                self.board.dimension,
                self.board.dimension,
                area
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(dimension) = cli_overrides.dimension {
            self.board.dimension = dimension;
        }
        if let Some(alive_cells) = cli_overrides.alive_cells {
            self.board.alive_cells = alive_cells;
        }
        if cli_overrides.seed.is_some() {
            self.board.seed = cli_overrides.seed;
        }
        if let Some(ref pattern) = cli_overrides.pattern_file {
            self.board.pattern_file = Some(pattern.clone());
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.run.interval_ms = interval_ms;
        }
        if cli_overrides.max_generations.is_some() {
            self.run.max_generations = cli_overrides.max_generations;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dimension: Option<usize>,
    pub alive_cells: Option<usize>,
    pub seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub interval_ms: Option<u64>,
    pub max_generations: Option<u64>,
    pub format: Option<OutputFormat>,
}
