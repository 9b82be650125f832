//! Player move list loader.
//!
//! Loads the player's attacks from the embedded RON data file.

use anyhow::Context;
use demon_core::AttackAction;

use super::LoadResult;

/// Registry for the player's selectable moves, in menu order.
#[derive(Debug, Clone)]
pub struct AttackRegistry {
    attacks: Vec<AttackAction>,
}

impl AttackRegistry {
    /// Loads the move list from the embedded RON data file.
    pub fn load() -> LoadResult<Self> {
        let raw = include_str!("../../data/attacks.ron");
        let attacks: Vec<AttackAction> =
            ron::from_str(raw).context("Failed to parse attacks.ron")?;
        Ok(Self { attacks })
    }

    /// All moves, in menu order. The slice is what the turn engine
    /// validates attack indices against.
    pub fn all(&self) -> &[AttackAction] {
        &self.attacks
    }

    /// Gets a move by menu index.
    pub fn get(&self, index: usize) -> Option<&AttackAction> {
        self.attacks.get(index)
    }

    /// Number of registered moves.
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    /// Returns true if no moves are registered.
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demon_core::{StatusKind, StatusPayload};

    #[test]
    fn test_load_attacks() {
        let registry = AttackRegistry::load().expect("Failed to load attacks");

        assert_eq!(registry.len(), 6);

        // Verify the workhorse move
        let study = registry.get(1).unwrap();
        assert_eq!(study.name, "Actually Study");
        assert_eq!(study.power, 45);
        assert_eq!(study.accuracy, 85);
        assert_eq!(study.energy_cost, 20);

        // Verify a restorative cost
        let rush = registry.get(2).unwrap();
        assert_eq!(rush.energy_cost, -10);
        let status = rush.status.expect("Caffeine Rush carries weaken");
        assert_eq!(status.payload.kind(), StatusKind::Weaken);
        assert_eq!(status.trigger_chance, 20);

        // Verify the utility move
        let procrastinate = registry.get(4).unwrap();
        assert_eq!(procrastinate.power, 0);

        // Verify the poison payload
        let all_nighter = registry.get(5).unwrap();
        assert_eq!(
            all_nighter.status.unwrap().payload,
            StatusPayload::Poison { damage_per_turn: 8 }
        );
    }
}
