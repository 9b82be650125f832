//! Battle sessions: the stateful wrapper a front end drives.
//!
//! A session owns the player, the encounter, and the RNG for one battle,
//! feeding choices into the engine one turn at a time. Nothing here is
//! shared between sessions — serving many users means many independent
//! sessions.

use demon_core::{
    ActionChoice, AttackAction, BattleConfig, BattleOutcome, DifficultyModifiers, Encounter,
    OpponentState, OpponentTemplate, PcgRng, PlayerState, RngOracle, Survival, TurnReport,
};

use crate::error::RuntimeError;

/// One bounded battle against a single demon.
pub struct BattleSession<R: RngOracle = PcgRng> {
    player: PlayerState,
    attacks: Vec<AttackAction>,
    encounter: Encounter,
    config: BattleConfig,
    rng: R,
    outcome: Option<BattleOutcome>,
}

impl BattleSession<PcgRng> {
    /// Starts a battle with a seeded PCG oracle. Pass `None` to seed from
    /// process entropy.
    pub fn new(
        player: PlayerState,
        attacks: Vec<AttackAction>,
        template: &OpponentTemplate,
        modifiers: Option<DifficultyModifiers>,
        seed: Option<u64>,
    ) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self::with_rng(player, attacks, template, modifiers, PcgRng::from_seed(seed))
    }
}

impl<R: RngOracle> BattleSession<R> {
    /// Starts a battle with a caller-supplied oracle (scripted in tests).
    pub fn with_rng(
        mut player: PlayerState,
        attacks: Vec<AttackAction>,
        template: &OpponentTemplate,
        modifiers: Option<DifficultyModifiers>,
        rng: R,
    ) -> Self {
        let encounter = Encounter::start(&mut player, template, modifiers);
        tracing::info!(
            player = %player.name,
            demon = %encounter.opponent.name,
            "battle started"
        );
        Self {
            player,
            attacks,
            encounter,
            config: BattleConfig::default(),
            rng,
            outcome: None,
        }
    }

    /// Resolves one turn. Rejected choices leave the battle untouched;
    /// submitting after the battle ended is a caller bug surfaced as
    /// [`RuntimeError::BattleOver`].
    pub fn resolve_turn(&mut self, choice: ActionChoice) -> Result<TurnReport, RuntimeError> {
        if self.outcome.is_some() {
            return Err(RuntimeError::BattleOver);
        }

        let report = self.encounter.resolve_turn(
            &mut self.player,
            &self.attacks,
            &self.config,
            &mut self.rng,
            choice,
        )?;

        if let Some(outcome) = report.outcome {
            self.outcome = Some(outcome);
            tracing::info!(
                player = %self.player.name,
                demon = %self.encounter.opponent.name,
                round = self.encounter.round,
                ?outcome,
                "battle ended"
            );
        }
        Ok(report)
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn opponent(&self) -> &OpponentState {
        &self.encounter.opponent
    }

    pub fn attacks(&self) -> &[AttackAction] {
        &self.attacks
    }

    pub fn round(&self) -> u32 {
        self.encounter.round
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// Hands the (possibly leveled-up) player back for persistence.
    pub fn into_player(self) -> PlayerState {
        self.player
    }
}

/// Endless survival over a roster of demons.
pub struct SurvivalSession<R: RngOracle = PcgRng> {
    player: PlayerState,
    attacks: Vec<AttackAction>,
    roster: Vec<OpponentTemplate>,
    survival: Survival,
    config: BattleConfig,
    rng: R,
    defeated: bool,
}

impl SurvivalSession<PcgRng> {
    /// Starts survival at wave 1 with a seeded PCG oracle.
    pub fn new(
        player: PlayerState,
        attacks: Vec<AttackAction>,
        roster: Vec<OpponentTemplate>,
        seed: Option<u64>,
    ) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self::with_rng(player, attacks, roster, PcgRng::from_seed(seed))
    }
}

impl<R: RngOracle> SurvivalSession<R> {
    /// Starts survival with a caller-supplied oracle.
    pub fn with_rng(
        mut player: PlayerState,
        attacks: Vec<AttackAction>,
        roster: Vec<OpponentTemplate>,
        mut rng: R,
    ) -> Self {
        let config = BattleConfig::default();
        let survival = Survival::start(&mut player, &roster, &config, &mut rng);
        tracing::info!(
            player = %player.name,
            demon = %survival.opponent.name,
            "survival started"
        );
        Self {
            player,
            attacks,
            roster,
            survival,
            config,
            rng,
            defeated: false,
        }
    }

    /// Resolves one turn; waves roll over internally, so the only
    /// terminal report carries [`BattleOutcome::Defeat`].
    pub fn resolve_turn(&mut self, choice: ActionChoice) -> Result<TurnReport, RuntimeError> {
        if self.defeated {
            return Err(RuntimeError::BattleOver);
        }

        let report = self.survival.resolve_turn(
            &mut self.player,
            &self.attacks,
            &self.roster,
            &self.config,
            &mut self.rng,
            choice,
        )?;

        if report.outcome.is_some() {
            self.defeated = true;
            tracing::info!(
                player = %self.player.name,
                waves_cleared = self.survival.waves_cleared(),
                total_xp = self.survival.total_xp,
                "survival run ended"
            );
        }
        Ok(report)
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn opponent(&self) -> &OpponentState {
        &self.survival.opponent
    }

    pub fn attacks(&self) -> &[AttackAction] {
        &self.attacks
    }

    pub fn wave(&self) -> u32 {
        self.survival.wave
    }

    pub fn waves_cleared(&self) -> u32 {
        self.survival.waves_cleared()
    }

    pub fn total_xp(&self) -> u32 {
        self.survival.total_xp
    }

    pub fn is_over(&self) -> bool {
        self.defeated
    }

    pub fn into_player(self) -> PlayerState {
        self.player
    }
}
