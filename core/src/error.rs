use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board dimensions")]
    InvalidDimensions,
    #[error("Board text does not match its declared dimensions")]
    MalformedInput,
    #[error("Coordinates outside the board")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, BoardError>;
