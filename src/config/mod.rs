//! Configuration management for the Game of Life simulation

pub mod settings;

pub use settings::{BoardConfig, CliOverrides, OutputConfig, OutputFormat, RunConfig, Settings};
