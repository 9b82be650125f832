//! Roll oracle for deterministic random number generation.
//!
//! Every nondeterministic decision in the engine (hit checks, damage
//! variance, critical hits, status triggers, flee attempts, crisis damage)
//! flows through the [`RngOracle`] trait. Swapping the oracle for a
//! scripted source reproduces any battle roll-for-roll.

/// Roll oracle consumed by the combat engine.
///
/// Implementations must be deterministic: given the same seed, they must
/// produce the same sequence of draws. The provided rolling helpers each
/// consume exactly one `next_u32` draw.
pub trait RngOracle {
    /// Produce the next raw 32-bit draw.
    fn next_u32(&mut self) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Common for percentage-based mechanics like hit chance.
    fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// Check a percent chance: true on `roll_d100 <= chance`.
    fn percent_check(&mut self, chance: u32) -> bool {
        self.roll_d100() <= chance
    }

    /// Uniform draw in `[min, max]` inclusive.
    ///
    /// Returns `min` without consuming a draw when the range is degenerate.
    fn roll_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max - min) as u32 + 1;
        min + (self.next_u32() % span) as i32
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output permuted from 64-bit LCG state. Small, fast,
/// and statistically solid, which is more than a comedy RPG strictly needs.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same battle
/// - **Small state**: Only 64 bits, trivially cheap to clone into a session
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed.
    pub fn from_seed(seed: u64) -> Self {
        // One warm-up step so nearby seeds diverge immediately
        Self {
            state: Self::pcg_step(seed ^ Self::INCREMENT),
        }
    }

    /// Advance the LCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Scripted oracle that replays a fixed queue of draws.
///
/// The substitution point for deterministic tests: queue one raw draw per
/// roll the code under test will make. A draw `d` yields
/// `roll_d100 = d % 100 + 1` and `roll_range(min, max) = min + d % span`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    draws: std::collections::VecDeque<u32>,
}

impl ScriptedRng {
    /// Create a scripted oracle from raw draws, consumed in order.
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Number of unconsumed draws remaining.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngOracle for ScriptedRng {
    /// Pops the next queued draw.
    ///
    /// # Panics
    ///
    /// Panics when the script runs dry; a test that under-provisions its
    /// draws is wrong, not unlucky.
    fn next_u32(&mut self) -> u32 {
        self.draws
            .pop_front()
            .expect("ScriptedRng ran out of draws")
    }
}
