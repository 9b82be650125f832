//! Runtime error types.

use demon_core::TurnError;

/// Errors surfaced by the session layer.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The engine rejected the chosen action; no turn was consumed and
    /// the caller should re-prompt.
    #[error(transparent)]
    Turn(#[from] TurnError),

    /// A turn was submitted after the battle already ended.
    #[error("the battle is already over")]
    BattleOver,
}

/// Errors from the save repository.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("could not determine a platform data directory")]
    NoDataDirectory,
}
