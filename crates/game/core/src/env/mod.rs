//! Environment services consumed by the engine but owned by the caller.
//!
//! The only such service is randomness: [`RngOracle`] is the single point
//! of substitution for all nondeterminism in combat.

pub mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
