//! Turn rejection conditions.
//!
//! The engine has no fatal states: every reachable battle state (hp at
//! zero, empty effect list, depleted resources) is valid. These errors are
//! pre-mutation rejections of the caller's input — the turn is not
//! consumed and the caller re-prompts.

/// Why a chosen action was rejected before any state changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("attack index {index} is out of range (have {available} moves)")]
    InvalidAttackIndex { index: usize, available: usize },

    #[error("not enough energy: need {need}, have {have}")]
    NotEnoughEnergy { need: u32, have: u32 },

    #[error("not enough sanity: need {need}, have {have}")]
    NotEnoughSanity { need: u32, have: u32 },
}
