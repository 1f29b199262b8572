use std::io;

use thiserror::Error;

/// Failures from the terminal layer. Desk operations themselves are total
/// functions over registry state and have no error path.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error("terminal io failed: {0}")]
    Io(#[from] io::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
