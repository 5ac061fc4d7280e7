//! Typed failures raised by the board and engine

use thiserror::Error;

pub type LifeResult<T> = Result<T, LifeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("Board dimension must be positive, got {dimension}")]
    InvalidDimension { dimension: usize },

    #[error("Cannot seed {requested} alive cells, only {available} dead cells are available")]
    InvalidCellCount { requested: usize, available: usize },

    #[error("Engine has no board; call build_empty_board first")]
    EngineNotInitialized,

    #[error("Coordinates ({row}, {col}) out of bounds for {dimension}x{dimension} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("Invalid board: {0}")]
    InvalidBoard(String),
}
