//! Caller-owned battle state.
//!
//! The engine holds nothing between turns: every mutation lands in these
//! types, which the caller persists (or simply keeps on the stack) between
//! `resolve_turn` calls.

pub mod combatant;
pub mod status;

pub use combatant::{OpponentState, OpponentTemplate, PlayerState, ResourceMeter};
pub use status::{
    ApplyOutcome, StatusEffect, StatusEffects, StatusKind, StatusPayload, StatusTemplate,
};
