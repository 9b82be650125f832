//! Combat resolution primitives.
//!
//! Pure functions over caller-owned state: attack resolution, status
//! effect ticks and application, and the event stream they emit. The turn
//! engine composes these into full rounds.

pub mod attack;
pub mod event;
pub mod status;

pub use attack::{AttackOutcome, AttackReport, resolve_attack};
pub use event::{Actor, BattleEvent};
pub use status::{tick_start_of_turn, try_apply};
