//! Selectable moves and the per-turn choice surface.

use std::fmt;

use crate::state::status::StatusTemplate;

/// A selectable attack or utility move.
///
/// `power == 0` marks a utility action (rest/skip): costs still apply but
/// no accuracy or damage rolls are made. Negative costs restore the
/// resource instead of consuming it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub name: String,
    pub power: u32,
    /// Percent chance to connect (1-100).
    pub accuracy: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_cost: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sanity_cost: i32,
    /// Flavor text, surfaced on a miss.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Status effect rolled for on a connecting hit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<StatusTemplate>,
}

impl fmt::Display for AttackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Pwr:{} Acc:{}%)", self.name, self.power, self.accuracy)
    }
}

/// The player's choice for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionChoice {
    /// Use the attack at this index in the player's move list.
    Attack(usize),
    /// Attempt to flee the battle.
    Flee,
}
