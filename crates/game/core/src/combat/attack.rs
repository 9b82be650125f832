//! Attack resolution: accuracy, damage variance, weaken, crits.

use crate::action::AttackAction;
use crate::combat::event::{Actor, BattleEvent};
use crate::combat::status;
use crate::config::BattleConfig;
use crate::env::RngOracle;
use crate::state::combatant::ResourceMeter;
use crate::state::status::StatusEffects;

/// How a single attack landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Zero-power utility move: no rolls made.
    Skipped,
    /// Failed the accuracy roll.
    Miss,
    /// Connected.
    Hit,
    /// Connected and doubled.
    Critical,
}

impl AttackOutcome {
    /// True when the attack actually landed on the defender.
    pub fn connected(self) -> bool {
        matches!(self, Self::Hit | Self::Critical)
    }
}

/// Result of one attack resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub outcome: AttackOutcome,
    /// Damage dealt (0 on a miss or utility move).
    pub damage: u32,
}

/// Resolves one attack against a defender.
///
/// Resource costs are the caller's concern: the turn layer validates
/// affordability and pays them before invoking this, so resolution never
/// rejects anything.
///
/// Roll order (one oracle draw each): accuracy, damage variance, crit,
/// then status trigger if the action carries a template. A weaken effect
/// on the *attacker* scales the damage down before the crit roll —
/// weaken debuffs damage dealt by the weakened side, it is not a
/// defender-side mitigation.
#[allow(clippy::too_many_arguments)]
pub fn resolve_attack<R: RngOracle>(
    rng: &mut R,
    actor: Actor,
    action: &AttackAction,
    attacker_effects: &StatusEffects,
    defender_hp: &mut ResourceMeter,
    defender_effects: &mut StatusEffects,
    spread: i32,
    config: &BattleConfig,
    events: &mut Vec<BattleEvent>,
) -> AttackReport {
    // Utility move: nothing to roll.
    if action.power == 0 {
        events.push(BattleEvent::Rested { actor });
        return AttackReport {
            outcome: AttackOutcome::Skipped,
            damage: 0,
        };
    }

    if rng.roll_d100() > action.accuracy {
        events.push(BattleEvent::Miss {
            actor,
            flavor: action.description.clone(),
        });
        return AttackReport {
            outcome: AttackOutcome::Miss,
            damage: 0,
        };
    }

    let raw = action.power as i32 + rng.roll_range(-spread, spread);
    let mut damage = raw.max(config.minimum_hit_damage as i32) as u32;

    let reduction = attacker_effects.damage_reduction_percent();
    if reduction > 0 {
        damage = damage * (100 - reduction) / 100;
    }

    let outcome = if rng.percent_check(config.crit_chance) {
        damage *= config.crit_multiplier;
        events.push(BattleEvent::CriticalHit { actor, damage });
        AttackOutcome::Critical
    } else {
        events.push(BattleEvent::Hit { actor, damage });
        AttackOutcome::Hit
    };

    defender_hp.damage(damage);
    status::try_apply(rng, action.status.as_ref(), actor.other(), defender_effects, events);

    AttackReport { outcome, damage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::status::{StatusEffect, StatusPayload};

    fn study() -> AttackAction {
        AttackAction {
            name: "Actually Study".into(),
            power: 45,
            accuracy: 85,
            energy_cost: 20,
            sanity_cost: 0,
            description: "Knowledge is power".into(),
            status: None,
        }
    }

    #[test]
    fn fixed_rolls_produce_the_expected_hit() {
        // hit d100=50 (<=85), variance 0, crit d100=50 (>10).
        let mut rng = ScriptedRng::new([49, 5, 49]);
        let config = BattleConfig::default();
        let mut hp = ResourceMeter::full(80);
        let mut defender_effects = StatusEffects::empty();
        let mut events = Vec::new();

        let report = resolve_attack(
            &mut rng,
            Actor::Player,
            &study(),
            &StatusEffects::empty(),
            &mut hp,
            &mut defender_effects,
            config.player_damage_spread,
            &config,
            &mut events,
        );

        assert_eq!(report.outcome, AttackOutcome::Hit);
        assert_eq!(report.damage, 45);
        assert_eq!(hp.current, 35);
    }

    #[test]
    fn miss_leaves_defender_untouched_and_carries_flavor() {
        // hit d100=90 (>85): no further draws.
        let mut rng = ScriptedRng::new([89]);
        let config = BattleConfig::default();
        let mut hp = ResourceMeter::full(80);
        let mut defender_effects = StatusEffects::empty();
        let mut events = Vec::new();

        let report = resolve_attack(
            &mut rng,
            Actor::Player,
            &study(),
            &StatusEffects::empty(),
            &mut hp,
            &mut defender_effects,
            config.player_damage_spread,
            &config,
            &mut events,
        );

        assert_eq!(report.outcome, AttackOutcome::Miss);
        assert_eq!(hp.current, 80);
        assert_eq!(
            events,
            vec![BattleEvent::Miss {
                actor: Actor::Player,
                flavor: "Knowledge is power".into()
            }]
        );
    }

    #[test]
    fn weakened_attacker_deals_reduced_damage() {
        // hit=50, variance draw 3 -> 0 over the opponent spread (damage
        // 45), crit roll fails.
        let mut rng = ScriptedRng::new([49, 3, 49]);
        let config = BattleConfig::default();
        let mut attacker_effects = StatusEffects::empty();
        attacker_effects.apply(StatusEffect {
            payload: StatusPayload::Weaken {
                reduction_percent: 30,
            },
            turns_remaining: 2,
        });
        let mut hp = ResourceMeter::full(80);
        let mut defender_effects = StatusEffects::empty();
        let mut events = Vec::new();

        let report = resolve_attack(
            &mut rng,
            Actor::Opponent,
            &study(),
            &attacker_effects,
            &mut hp,
            &mut defender_effects,
            config.opponent_damage_spread,
            &config,
            &mut events,
        );

        // floor(45 * 0.7) = 31
        assert_eq!(report.damage, 31);
        assert_eq!(hp.current, 49);
    }

    #[test]
    fn crit_doubles_after_weaken() {
        // hit=50, variance 0, crit d100=10 (<=10).
        let mut rng = ScriptedRng::new([49, 5, 9]);
        let config = BattleConfig::default();
        let mut hp = ResourceMeter::full(200);
        let mut defender_effects = StatusEffects::empty();
        let mut events = Vec::new();

        let report = resolve_attack(
            &mut rng,
            Actor::Player,
            &study(),
            &StatusEffects::empty(),
            &mut hp,
            &mut defender_effects,
            config.player_damage_spread,
            &config,
            &mut events,
        );

        assert_eq!(report.outcome, AttackOutcome::Critical);
        assert_eq!(report.damage, 90);
        assert!(matches!(
            events[0],
            BattleEvent::CriticalHit { damage: 90, .. }
        ));
    }

    #[test]
    fn utility_move_rolls_nothing() {
        let procrastinate = AttackAction {
            name: "Procrastinate".into(),
            power: 0,
            accuracy: 100,
            energy_cost: -30,
            sanity_cost: 10,
            description: "Skip turn".into(),
            status: None,
        };
        let mut rng = ScriptedRng::new([]);
        let config = BattleConfig::default();
        let mut hp = ResourceMeter::full(80);
        let mut defender_effects = StatusEffects::empty();
        let mut events = Vec::new();

        let report = resolve_attack(
            &mut rng,
            Actor::Player,
            &procrastinate,
            &StatusEffects::empty(),
            &mut hp,
            &mut defender_effects,
            config.player_damage_spread,
            &config,
            &mut events,
        );

        assert_eq!(report.outcome, AttackOutcome::Skipped);
        assert_eq!(hp.current, 80);
        assert_eq!(events, vec![BattleEvent::Rested { actor: Actor::Player }]);
    }

    #[test]
    fn minimum_damage_floor_applies_to_bad_variance() {
        let jab = AttackAction {
            name: "Weak Jab".into(),
            power: 2,
            accuracy: 100,
            energy_cost: 0,
            sanity_cost: 0,
            description: String::new(),
            status: None,
        };
        // hit=1, variance -5 (raw -3 -> floor 1), no crit.
        let mut rng = ScriptedRng::new([0, 0, 49]);
        let config = BattleConfig::default();
        let mut hp = ResourceMeter::full(80);
        let mut defender_effects = StatusEffects::empty();
        let mut events = Vec::new();

        let report = resolve_attack(
            &mut rng,
            Actor::Player,
            &jab,
            &StatusEffects::empty(),
            &mut hp,
            &mut defender_effects,
            config.player_damage_spread,
            &config,
            &mut events,
        );

        assert_eq!(report.damage, 1);
        assert_eq!(hp.current, 79);
    }
}
