//! Status effect state for combatants.
//!
//! Effects are timed modifiers counted in the owner's turns: poison deals
//! damage at the start of each of the owner's turns, stun forfeits the
//! owner's action, weaken reduces damage the owner deals. Durations
//! decrement once per owner turn and the effect drops at zero.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;

/// Discriminant for the three effect families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    Poison,
    Stun,
    Weaken,
}

/// Kind-specific payload, matched exhaustively wherever effects are
/// processed so an unhandled kind is a compile error rather than a silent
/// no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusPayload {
    /// Hp loss at the start of each of the owner's turns.
    Poison { damage_per_turn: u32 },
    /// Owner forfeits their action for the turn.
    Stun,
    /// Damage dealt by the owner is reduced by this percent (30 = -30%).
    Weaken { reduction_percent: u32 },
}

impl StatusPayload {
    /// The kind this payload belongs to.
    pub fn kind(&self) -> StatusKind {
        match self {
            Self::Poison { .. } => StatusKind::Poison,
            Self::Stun => StatusKind::Stun,
            Self::Weaken { .. } => StatusKind::Weaken,
        }
    }
}

/// A single active effect on a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub payload: StatusPayload,
    /// Turns left, decremented at the start of the owner's turn; the
    /// effect is removed when it reaches zero. Always >= 1 while active.
    pub turns_remaining: u32,
}

/// Template carried by an action, instantiated on a successful trigger roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTemplate {
    pub payload: StatusPayload,
    /// Percent chance to apply on a connecting hit (1-100).
    pub trigger_chance: u32,
    /// Duration in owner turns.
    pub duration: u32,
}

impl StatusTemplate {
    /// Instantiate a fresh effect, copying duration and payload.
    pub fn instantiate(&self) -> StatusEffect {
        StatusEffect {
            payload: self.payload,
            turns_remaining: self.duration,
        }
    }
}

/// Whether an application created a new instance or refreshed an old one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Refreshed,
}

/// Active status effects on a combatant, in application order.
///
/// Invariant: at most one instance per [`StatusKind`]. Applying a kind
/// that is already present refreshes its remaining duration instead of
/// stacking a second instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { BattleConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks whether an effect of the given kind is active.
    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects.iter().any(|e| e.payload.kind() == kind)
    }

    /// Applies an effect, refreshing duration if the kind already exists.
    pub fn apply(&mut self, effect: StatusEffect) -> ApplyOutcome {
        if let Some(existing) = self
            .effects
            .iter_mut()
            .find(|e| e.payload.kind() == effect.payload.kind())
        {
            existing.turns_remaining = effect.turns_remaining;
            return ApplyOutcome::Refreshed;
        }

        // One instance per kind and fewer kinds than the cap, so there
        // is always room; `push` panics if that invariant ever breaks.
        debug_assert!(!self.effects.is_full());
        self.effects.push(effect);
        ApplyOutcome::Applied
    }

    /// Percent damage reduction from an active weaken effect, else 0.
    ///
    /// The one-instance-per-kind invariant keeps the lookup unambiguous.
    pub fn damage_reduction_percent(&self) -> u32 {
        self.effects
            .iter()
            .find_map(|e| match e.payload {
                StatusPayload::Weaken { reduction_percent } => Some(reduction_percent),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Drops every effect whose duration has run out.
    pub fn remove_expired(&mut self) {
        self.effects.retain(|e| e.turns_remaining > 0);
    }

    /// Removes all effects (combatant reset).
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Iterates active effects in application order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    /// Mutable iteration, used by the start-of-turn tick processor.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut StatusEffect> {
        self.effects.iter_mut()
    }

    /// Number of active effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// True when no effects are active.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
