//! Session and persistence layer for daily-demon battles.
//!
//! `demon-runtime` glues the pure engine in `demon-core` to the world:
//! it owns per-battle sessions (entropy-seeded RNG, attack list, the
//! opponent instance) and the file-backed save repository for durable
//! player state. Front ends talk to this crate, not to the engine.

pub mod error;
pub mod save;
pub mod session;

pub use error::{RuntimeError, SaveError};
pub use save::SaveRepository;
pub use session::{BattleSession, SurvivalSession};
