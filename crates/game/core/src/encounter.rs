//! Encounter controllers: one bounded battle, or endless survival waves.

use crate::action::{ActionChoice, AttackAction};
use crate::combat::BattleEvent;
use crate::config::BattleConfig;
use crate::engine::{BattleOutcome, TurnEngine, TurnError, TurnReport};
use crate::env::RngOracle;
use crate::state::{OpponentState, OpponentTemplate, PlayerState};

/// Optional pre-battle rescaling of player max hp and opponent attack
/// power, in percent (100 = unchanged). How the value was chosen is the
/// caller's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyModifiers {
    pub player_hp_percent: u32,
    pub opponent_power_percent: u32,
}

impl DifficultyModifiers {
    /// +25% player hp, -25% opponent power.
    pub fn easier() -> Self {
        Self {
            player_hp_percent: 125,
            opponent_power_percent: 75,
        }
    }

    /// -25% player hp, +25% opponent power.
    pub fn harder() -> Self {
        Self {
            player_hp_percent: 75,
            opponent_power_percent: 125,
        }
    }
}

impl Default for DifficultyModifiers {
    fn default() -> Self {
        Self {
            player_hp_percent: 100,
            opponent_power_percent: 100,
        }
    }
}

/// A single bounded battle against one opponent.
///
/// Owns the opponent instance and the round counter; the player is
/// borrowed per turn so the caller keeps custody of durable state.
#[derive(Clone, Debug)]
pub struct Encounter {
    pub opponent: OpponentState,
    pub round: u32,
    /// Player max hp (before scaling, after scaling), reverted by delta
    /// at battle end so mid-battle level-up gains survive.
    hp_rescale: Option<(u32, u32)>,
}

impl Encounter {
    /// Sets up a battle: full player restore, fresh opponent, optional
    /// difficulty rescale applied before the first turn.
    pub fn start(
        player: &mut PlayerState,
        template: &OpponentTemplate,
        modifiers: Option<DifficultyModifiers>,
    ) -> Self {
        let mut opponent = OpponentState::from_template(template);
        let mut hp_rescale = None;

        if let Some(modifiers) = modifiers {
            let base = player.hp.maximum;
            let scaled = base * modifiers.player_hp_percent / 100;
            hp_rescale = Some((base, scaled));
            player.hp.maximum = scaled;
            for action in &mut opponent.actions {
                action.power = action.power * modifiers.opponent_power_percent / 100;
            }
        }

        player.restore_for_battle();

        Self {
            opponent,
            round: 1,
            hp_rescale,
        }
    }

    /// Resolves one round. On a terminal outcome the difficulty rescale
    /// of the player's max hp is reverted so saves stay clean.
    pub fn resolve_turn<R: RngOracle>(
        &mut self,
        player: &mut PlayerState,
        attacks: &[AttackAction],
        config: &BattleConfig,
        rng: &mut R,
        choice: ActionChoice,
    ) -> Result<TurnReport, TurnError> {
        let report = TurnEngine::new(player, attacks, &mut self.opponent, config, rng)
            .resolve_turn(choice)?;

        if report.outcome.is_some() {
            if let Some((base, scaled)) = self.hp_rescale.take() {
                // Anything gained on top of the scaled value (level-up
                // maximum increases) carries over onto the base.
                player.hp.maximum = base + (player.hp.maximum - scaled);
                player.hp.current = player.hp.current.min(player.hp.maximum);
            }
        } else {
            self.round += 1;
        }
        Ok(report)
    }
}

/// Endless survival: waves of scaled opponents until the player drops.
///
/// Fleeing is disabled, victories roll straight into the next wave with a
/// partial recovery, and the only terminal outcome is defeat.
#[derive(Clone, Debug)]
pub struct Survival {
    pub opponent: OpponentState,
    pub wave: u32,
    pub total_xp: u32,
    pub round: u32,
}

impl Survival {
    /// Starts wave 1 with a fully restored player and a scaled opponent
    /// sampled from the roster.
    ///
    /// # Panics
    ///
    /// Panics when `roster` is empty.
    pub fn start<R: RngOracle>(
        player: &mut PlayerState,
        roster: &[OpponentTemplate],
        config: &BattleConfig,
        rng: &mut R,
    ) -> Self {
        player.restore_for_battle();
        let wave = 1;
        let template = sample(roster, rng);
        Self {
            opponent: OpponentState::from_template_scaled(template, wave, config),
            wave,
            total_xp: 0,
            round: 1,
        }
    }

    /// Waves fully cleared so far.
    pub fn waves_cleared(&self) -> u32 {
        self.wave - 1
    }

    /// Resolves one round. A victory is absorbed into wave bookkeeping
    /// (recovery, next spawn) and reported as a non-terminal turn; only
    /// defeat ends the run.
    pub fn resolve_turn<R: RngOracle>(
        &mut self,
        player: &mut PlayerState,
        attacks: &[AttackAction],
        roster: &[OpponentTemplate],
        config: &BattleConfig,
        rng: &mut R,
        choice: ActionChoice,
    ) -> Result<TurnReport, TurnError> {
        let mut report = TurnEngine::new(player, attacks, &mut self.opponent, config, rng)
            .with_flee_disabled()
            .resolve_turn(choice)?;

        match report.outcome {
            Some(BattleOutcome::Victory(reward)) => {
                self.total_xp += reward.xp_gained;
                report.events.push(BattleEvent::WaveCleared {
                    wave: self.wave,
                    xp_gained: reward.xp_gained,
                });

                // Partial recovery, deliberately not a full reset.
                player.heal(config.wave_recovery_hp);
                player.spend_energy(-(config.wave_recovery_energy as i32));
                player.spend_sanity(-(config.wave_recovery_sanity as i32));

                self.wave += 1;
                let template = sample(roster, rng);
                self.opponent = OpponentState::from_template_scaled(template, self.wave, config);
                report.events.push(BattleEvent::WaveSpawned {
                    wave: self.wave,
                    name: self.opponent.name.clone(),
                    hp: self.opponent.hp.current,
                });

                report.outcome = None;
                self.round += 1;
            }
            Some(BattleOutcome::Defeat) => {}
            // Flee is disabled; the engine cannot report it.
            Some(BattleOutcome::Fled) => unreachable!("flee is disabled in survival"),
            None => self.round += 1,
        }

        Ok(report)
    }
}

/// Uniform roster sample.
///
/// # Panics
///
/// Panics on an empty roster; survival needs at least one template to
/// spawn from.
fn sample<'a, R: RngOracle>(roster: &'a [OpponentTemplate], rng: &mut R) -> &'a OpponentTemplate {
    assert!(!roster.is_empty(), "survival roster must not be empty");
    let index = rng.roll_range(0, roster.len() as i32 - 1) as usize;
    &roster[index]
}
