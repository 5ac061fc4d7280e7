//! Console helpers shared by the renderers and the CLI

pub mod display;

pub use display::{BoardFormatter, Color, ColorOutput};
