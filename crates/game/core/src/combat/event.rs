//! Structured battle events.
//!
//! The engine never formats or prints; it emits these values in order and
//! the presentation layer renders them to whatever medium it likes.

use crate::state::status::StatusKind;

/// Which side of the battle an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Actor {
    Player,
    Opponent,
}

impl Actor {
    /// The other side.
    pub fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// One thing that happened during turn resolution, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// An actor committed to a move.
    AttackUsed { actor: Actor, name: String },
    /// Opponent move flavor line, emitted alongside every opponent attack.
    FlavorText { text: String },
    /// A connecting hit.
    Hit { actor: Actor, damage: u32 },
    /// A connecting critical hit (replaces the plain hit event).
    CriticalHit { actor: Actor, damage: u32 },
    /// The attack failed its accuracy roll; flavor is the move description.
    Miss { actor: Actor, flavor: String },
    /// A zero-power utility move: costs applied, nothing else happened.
    Rested { actor: Actor },

    /// A status effect landed on a combatant.
    StatusApplied { target: Actor, kind: StatusKind },
    /// An already-active effect had its duration refreshed.
    StatusRefreshed { target: Actor, kind: StatusKind },
    /// An effect's duration ran out.
    StatusExpired { target: Actor, kind: StatusKind },
    /// Start-of-turn poison damage.
    PoisonTick { target: Actor, damage: u32 },
    /// The combatant is stunned and forfeits their action this turn.
    Stunned { target: Actor },

    /// Sanity drained from the player by an opponent hit.
    SanityDrained { amount: u32 },
    /// Unavoidable damage from sanity sitting at zero.
    SanityCrisis { damage: u32 },

    /// The player escaped the battle.
    FleeSucceeded,
    /// The flee roll failed; the opponent still acts.
    FleeFailed,
    /// Fleeing is not allowed here (survival mode); the opponent still acts.
    FleeBlocked,

    /// A survival wave went down.
    WaveCleared { wave: u32, xp_gained: u32 },
    /// The next survival opponent stepped up.
    WaveSpawned { wave: u32, name: String, hp: u32 },
}
