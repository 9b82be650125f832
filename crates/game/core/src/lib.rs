//! Deterministic combat resolution for fighting your daily demons.
//!
//! `demon-core` defines the canonical battle rules (actions, status
//! effects, turn orchestration, progression, encounters) as pure APIs
//! over caller-owned state. All nondeterminism flows through
//! [`env::RngOracle`], so any battle can be replayed roll-for-roll, and
//! the engine holds nothing between turns — a terminal loop and a
//! stateless web session drive it the same way.

pub mod action;
pub mod combat;
pub mod config;
pub mod encounter;
pub mod engine;
pub mod env;
pub mod progress;
pub mod state;

pub use action::{ActionChoice, AttackAction};
pub use combat::{Actor, AttackOutcome, AttackReport, BattleEvent};
pub use config::BattleConfig;
pub use encounter::{DifficultyModifiers, Encounter, Survival};
pub use engine::{BattleOutcome, TurnEngine, TurnError, TurnReport};
pub use env::{PcgRng, RngOracle, ScriptedRng};
pub use progress::{VictoryReward, award_victory};
pub use state::{
    OpponentState, OpponentTemplate, PlayerState, ResourceMeter, StatusEffect, StatusEffects,
    StatusKind, StatusPayload, StatusTemplate,
};
