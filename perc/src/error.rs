use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid size must be at least 1")]
    InvalidSize,
    #[error("number of trials must be at least 1")]
    InvalidTrials,
    #[error("site ({row}, {col}) is outside of the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
