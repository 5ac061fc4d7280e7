//! Conway's Game of Life
//!
//! A square-board simulation engine with random seeding and B3/S23 stepping,
//! plus a fixed-interval driver and terminal/JSON renderers.

pub mod config;
pub mod driver;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use driver::{run_game, Driver, Renderer, RunSummary};
pub use game_of_life::{Grid, LifeEngine, LifeError};
