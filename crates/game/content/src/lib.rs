//! Static game content and loaders.
//!
//! This crate houses the data the engine treats as read-only
//! collaborators:
//! - The player's move list (data-driven via RON)
//! - The demon roster (data-driven via RON)
//!
//! All loaders deserialize directly into demon-core types; content never
//! appears in battle state except as fresh per-battle copies.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{AttackRegistry, DemonRegistry};
