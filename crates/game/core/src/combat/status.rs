//! Status effect processing: start-of-turn ticks and on-hit application.

use crate::combat::event::{Actor, BattleEvent};
use crate::env::RngOracle;
use crate::state::combatant::ResourceMeter;
use crate::state::status::{ApplyOutcome, StatusEffects, StatusPayload, StatusTemplate};

/// Runs the start-of-turn tick for one combatant.
///
/// In application order: poison deals its damage, stun marks the turn as
/// forfeited, weaken does nothing here (it is a read-only modifier
/// consulted during damage calculation). Every effect then loses one turn
/// of duration; expired effects are dropped with an expiry event.
///
/// Returns true when the combatant is stunned for this turn.
pub fn tick_start_of_turn(
    owner: Actor,
    hp: &mut ResourceMeter,
    effects: &mut StatusEffects,
    events: &mut Vec<BattleEvent>,
) -> bool {
    let mut stunned = false;

    for effect in effects.iter_mut() {
        match effect.payload {
            StatusPayload::Poison { damage_per_turn } => {
                hp.damage(damage_per_turn);
                events.push(BattleEvent::PoisonTick {
                    target: owner,
                    damage: damage_per_turn,
                });
            }
            StatusPayload::Stun => {
                stunned = true;
                events.push(BattleEvent::Stunned { target: owner });
            }
            StatusPayload::Weaken { .. } => {}
        }

        effect.turns_remaining -= 1;
        if effect.turns_remaining == 0 {
            events.push(BattleEvent::StatusExpired {
                target: owner,
                kind: effect.payload.kind(),
            });
        }
    }

    effects.remove_expired();
    stunned
}

/// Rolls an action's status template against a target.
///
/// No-op when the action carries no template or the trigger roll fails.
/// Otherwise the effect is applied (or its duration refreshed, preserving
/// the one-instance-per-kind invariant) and the matching event emitted.
pub fn try_apply<R: RngOracle>(
    rng: &mut R,
    template: Option<&StatusTemplate>,
    target: Actor,
    effects: &mut StatusEffects,
    events: &mut Vec<BattleEvent>,
) {
    let Some(template) = template else {
        return;
    };
    if !rng.percent_check(template.trigger_chance) {
        return;
    }

    let kind = template.payload.kind();
    match effects.apply(template.instantiate()) {
        ApplyOutcome::Applied => events.push(BattleEvent::StatusApplied { target, kind }),
        ApplyOutcome::Refreshed => events.push(BattleEvent::StatusRefreshed { target, kind }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::status::StatusEffect;

    #[test]
    fn poison_ticks_then_expires_in_order() {
        // Scenario: poison 8/turn with 1 turn left on a combatant at 20 hp.
        let mut hp = ResourceMeter::new(20, 20);
        let mut effects = StatusEffects::empty();
        effects.apply(StatusEffect {
            payload: StatusPayload::Poison { damage_per_turn: 8 },
            turns_remaining: 1,
        });

        let mut events = Vec::new();
        let stunned = tick_start_of_turn(Actor::Player, &mut hp, &mut effects, &mut events);

        assert!(!stunned);
        assert_eq!(hp.current, 12);
        assert!(effects.is_empty());
        assert_eq!(
            events,
            vec![
                BattleEvent::PoisonTick {
                    target: Actor::Player,
                    damage: 8
                },
                BattleEvent::StatusExpired {
                    target: Actor::Player,
                    kind: crate::state::status::StatusKind::Poison
                },
            ]
        );
    }

    #[test]
    fn stun_forfeits_exactly_one_turn() {
        let mut hp = ResourceMeter::full(50);
        let mut effects = StatusEffects::empty();
        effects.apply(StatusEffect {
            payload: StatusPayload::Stun,
            turns_remaining: 1,
        });

        let mut events = Vec::new();
        assert!(tick_start_of_turn(
            Actor::Opponent,
            &mut hp,
            &mut effects,
            &mut events
        ));
        assert!(effects.is_empty());

        // Next tick: nothing left to forfeit.
        events.clear();
        assert!(!tick_start_of_turn(
            Actor::Opponent,
            &mut hp,
            &mut effects,
            &mut events
        ));
        assert!(events.is_empty());
    }

    #[test]
    fn trigger_roll_gates_application() {
        let template = StatusTemplate {
            payload: StatusPayload::Poison { damage_per_turn: 8 },
            trigger_chance: 25,
            duration: 3,
        };
        let mut effects = StatusEffects::empty();
        let mut events = Vec::new();

        // d100 = 26 > 25: no application.
        let mut rng = ScriptedRng::new([25]);
        try_apply(
            &mut rng,
            Some(&template),
            Actor::Opponent,
            &mut effects,
            &mut events,
        );
        assert!(effects.is_empty());
        assert!(events.is_empty());

        // d100 = 25 <= 25: applied.
        let mut rng = ScriptedRng::new([24]);
        try_apply(
            &mut rng,
            Some(&template),
            Actor::Opponent,
            &mut effects,
            &mut events,
        );
        assert_eq!(effects.len(), 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn missing_template_consumes_no_rolls() {
        let mut effects = StatusEffects::empty();
        let mut events = Vec::new();
        let mut rng = ScriptedRng::new([]);
        try_apply(&mut rng, None, Actor::Player, &mut effects, &mut events);
        assert!(events.is_empty());
    }
}
