use crate::input::ChoiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IslandError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed while waiting for a choice")]
    InputClosed,

    #[error("Invalid selection: {0}")]
    Choice(#[from] ChoiceError),

    #[error("Strategy {0} has no move on this menu")]
    NoMove(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IslandError>;
