//! Turn orchestration: one full round of battle per call.
//!
//! The engine borrows caller-owned state for the duration of a single
//! `resolve_turn` call and holds nothing in between, so the same battle
//! can be driven from a terminal loop or replayed across stateless
//! round-trips as long as the caller persists both combatants.

pub mod errors;

pub use errors::TurnError;

use crate::action::{ActionChoice, AttackAction};
use crate::combat::{self, Actor, BattleEvent};
use crate::config::BattleConfig;
use crate::env::RngOracle;
use crate::progress::{self, VictoryReward};
use crate::state::{OpponentState, PlayerState};

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    /// The opponent went down; progression has already been applied.
    Victory(VictoryReward),
    /// The player went down; the loss has already been recorded.
    Defeat,
    /// The player escaped.
    Fled,
}

/// Everything that happened in one resolved round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub events: Vec<BattleEvent>,
    /// Set when the battle ended this round.
    pub outcome: Option<BattleOutcome>,
}

/// One-round resolver over borrowed battle state.
///
/// Round sequence: player effect tick, player action (or forfeit when
/// stunned), victory check, opponent effect tick and action, sanity
/// crisis check, defeat check. Invalid or unaffordable choices are
/// rejected up front via [`TurnError`] with no state touched.
pub struct TurnEngine<'a, R: RngOracle> {
    player: &'a mut PlayerState,
    attacks: &'a [AttackAction],
    opponent: &'a mut OpponentState,
    config: &'a BattleConfig,
    rng: &'a mut R,
    flee_allowed: bool,
}

impl<'a, R: RngOracle> TurnEngine<'a, R> {
    pub fn new(
        player: &'a mut PlayerState,
        attacks: &'a [AttackAction],
        opponent: &'a mut OpponentState,
        config: &'a BattleConfig,
        rng: &'a mut R,
    ) -> Self {
        Self {
            player,
            attacks,
            opponent,
            config,
            rng,
            flee_allowed: true,
        }
    }

    /// Disables fleeing: attempts fall into the failed-flee branch and the
    /// opponent still acts. Used by survival mode.
    pub fn with_flee_disabled(mut self) -> Self {
        self.flee_allowed = false;
        self
    }

    /// Resolves one full round for the given choice.
    pub fn resolve_turn(&mut self, choice: ActionChoice) -> Result<TurnReport, TurnError> {
        self.validate(choice)?;

        let mut events = Vec::new();

        // Player start-of-turn effects; a poison tick can end it here.
        let player_stunned = combat::tick_start_of_turn(
            Actor::Player,
            &mut self.player.hp,
            &mut self.player.effects,
            &mut events,
        );
        if !self.player.is_alive() {
            return Ok(self.defeat(events));
        }

        // Player action, unless the stun forfeits it outright.
        if !player_stunned {
            match choice {
                ActionChoice::Flee => {
                    if self.flee_allowed && self.rng.percent_check(self.config.flee_chance) {
                        events.push(BattleEvent::FleeSucceeded);
                        return Ok(TurnReport {
                            events,
                            outcome: Some(BattleOutcome::Fled),
                        });
                    }
                    events.push(if self.flee_allowed {
                        BattleEvent::FleeFailed
                    } else {
                        BattleEvent::FleeBlocked
                    });
                }
                ActionChoice::Attack(index) => {
                    let action = self.attacks[index].clone();

                    // Costs are paid unconditionally; affordability was
                    // checked before any mutation.
                    self.player.spend_energy(action.energy_cost);
                    self.player.spend_sanity(action.sanity_cost);
                    events.push(BattleEvent::AttackUsed {
                        actor: Actor::Player,
                        name: action.name.clone(),
                    });

                    combat::resolve_attack(
                        self.rng,
                        Actor::Player,
                        &action,
                        &self.player.effects,
                        &mut self.opponent.hp,
                        &mut self.opponent.effects,
                        self.config.player_damage_spread,
                        self.config,
                        &mut events,
                    );

                    if !self.opponent.is_alive() {
                        return Ok(self.victory(events));
                    }
                }
            }
        }

        // Opponent start-of-turn effects; poison can finish them too.
        let opponent_stunned = combat::tick_start_of_turn(
            Actor::Opponent,
            &mut self.opponent.hp,
            &mut self.opponent.effects,
            &mut events,
        );
        if !self.opponent.is_alive() {
            return Ok(self.victory(events));
        }

        if !opponent_stunned && !self.opponent.actions.is_empty() {
            self.opponent_acts(&mut events);
        }

        // End-of-round crisis: sanity at zero keeps hurting.
        if self.player.sanity.is_depleted() && self.player.is_alive() {
            let extra = self.rng.roll_range(
                self.config.crisis_damage_min as i32,
                self.config.crisis_damage_max as i32,
            ) as u32;
            self.player.take_damage(extra);
            events.push(BattleEvent::SanityCrisis { damage: extra });
        }

        if !self.player.is_alive() {
            return Ok(self.defeat(events));
        }

        Ok(TurnReport {
            events,
            outcome: None,
        })
    }

    /// Rejects invalid or unaffordable choices before anything mutates,
    /// so a rejected turn is never consumed.
    fn validate(&self, choice: ActionChoice) -> Result<(), TurnError> {
        let ActionChoice::Attack(index) = choice else {
            return Ok(());
        };

        let action = self
            .attacks
            .get(index)
            .ok_or(TurnError::InvalidAttackIndex {
                index,
                available: self.attacks.len(),
            })?;

        if action.energy_cost > 0 && self.player.energy.current < action.energy_cost as u32 {
            return Err(TurnError::NotEnoughEnergy {
                need: action.energy_cost as u32,
                have: self.player.energy.current,
            });
        }
        if action.sanity_cost > 0 && self.player.sanity.current < action.sanity_cost as u32 {
            return Err(TurnError::NotEnoughSanity {
                need: action.sanity_cost as u32,
                have: self.player.sanity.current,
            });
        }
        Ok(())
    }

    /// The opponent picks uniformly among its moves and attacks. Every
    /// connecting hit also drains some of the player's sanity.
    fn opponent_acts(&mut self, events: &mut Vec<BattleEvent>) {
        let index = self
            .rng
            .roll_range(0, self.opponent.actions.len() as i32 - 1) as usize;
        let action = self.opponent.actions[index].clone();

        events.push(BattleEvent::AttackUsed {
            actor: Actor::Opponent,
            name: action.name.clone(),
        });
        events.push(BattleEvent::FlavorText {
            text: action.description.clone(),
        });

        let report = combat::resolve_attack(
            self.rng,
            Actor::Opponent,
            &action,
            &self.opponent.effects,
            &mut self.player.hp,
            &mut self.player.effects,
            self.config.opponent_damage_spread,
            self.config,
            events,
        );

        if report.outcome.connected() {
            let drain = self.rng.roll_range(
                self.config.sanity_drain_min as i32,
                self.config.sanity_drain_max as i32,
            );
            self.player.spend_sanity(drain);
            events.push(BattleEvent::SanityDrained {
                amount: drain as u32,
            });
        }
    }

    fn victory(&mut self, events: Vec<BattleEvent>) -> TurnReport {
        let reward = progress::award_victory(self.player, self.opponent, self.config);
        TurnReport {
            events,
            outcome: Some(BattleOutcome::Victory(reward)),
        }
    }

    fn defeat(&mut self, events: Vec<BattleEvent>) -> TurnReport {
        self.player.losses += 1;
        TurnReport {
            events,
            outcome: Some(BattleOutcome::Defeat),
        }
    }
}
