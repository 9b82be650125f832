//! Combatant state: the player character and opponent instances.
//!
//! Both sides share the same health/effect mechanics; the player
//! additionally carries bounded secondary resources (energy, sanity) and
//! durable progression fields that persist across battles.

use std::collections::BTreeSet;
use std::fmt;

use crate::action::AttackAction;
use crate::config::BattleConfig;
use crate::state::status::StatusEffects;

/// Integer resource meter (health, energy, sanity) tracked per combatant.
///
/// Invariant: `0 <= current <= maximum` after every mutator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// A full meter.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Reduces the meter, clamped at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Restores the meter, capped at the maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.maximum);
    }

    /// Spends a signed amount: positive consumes, negative restores,
    /// matching the sign convention of action cost fields. The result is
    /// clamped to `[0, maximum]` regardless of magnitude.
    pub fn spend(&mut self, amount: i32) {
        let next = i64::from(self.current) - i64::from(amount);
        self.current = next.clamp(0, i64::from(self.maximum)) as u32;
    }

    /// Refills to the maximum.
    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    /// True at exactly zero.
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

/// The human-controlled character. Created once per save and persisted
/// across battles; transient battle state (hp, effects) is reset by
/// [`PlayerState::restore_for_battle`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub hp: ResourceMeter,
    pub energy: ResourceMeter,
    pub sanity: ResourceMeter,
    pub wins: u32,
    pub losses: u32,
    /// Names of opponents beaten at least once. Append-only, duplicate-free.
    pub defeated: BTreeSet<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: StatusEffects,
}

impl PlayerState {
    /// Fresh level-1 character.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            experience: 0,
            hp: ResourceMeter::full(BattleConfig::STARTING_HP),
            energy: ResourceMeter::full(BattleConfig::STARTING_ENERGY),
            sanity: ResourceMeter::full(BattleConfig::STARTING_SANITY),
            wins: 0,
            losses: 0,
            defeated: BTreeSet::new(),
            effects: StatusEffects::empty(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp.damage(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp.restore(amount);
    }

    /// Signed energy adjustment (positive consumes, negative restores).
    pub fn spend_energy(&mut self, amount: i32) {
        self.energy.spend(amount);
    }

    /// Signed sanity adjustment (positive consumes, negative restores).
    pub fn spend_sanity(&mut self, amount: i32) {
        self.sanity.spend(amount);
    }

    /// Full refill of hp/energy/sanity and a clean effect list, run at
    /// the start of every battle.
    pub fn restore_for_battle(&mut self) {
        self.hp.refill();
        self.energy.refill();
        self.sanity.refill();
        self.effects.clear();
    }

    /// Records a beaten opponent. Idempotent: recording the same name
    /// twice leaves a single entry.
    pub fn record_victory(&mut self, opponent_name: &str) {
        if !self.defeated.contains(opponent_name) {
            self.defeated.insert(opponent_name.to_string());
        }
    }

    /// Adds experience and resolves level-ups, repeating for multi-level
    /// jumps in a single award. Returns the number of levels gained.
    pub fn gain_xp(&mut self, xp: u32, config: &BattleConfig) -> u32 {
        self.experience += xp;
        let mut gained = 0;
        while self.experience >= self.level * config.level_threshold_base {
            self.experience -= self.level * config.level_threshold_base;
            self.level += 1;
            self.hp.maximum += config.level_up_hp_gain;
            self.energy.maximum += config.level_up_energy_gain;
            self.sanity.maximum += config.level_up_sanity_gain;
            gained += 1;
        }
        gained
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Lv.{})", self.name, self.level)
    }
}

/// Immutable roster entry an opponent instance is spawned from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentTemplate {
    pub name: String,
    pub level: u32,
    pub base_hp: u32,
    pub actions: Vec<AttackAction>,
    /// Flavor line shown when the opponent appears.
    #[cfg_attr(feature = "serde", serde(default))]
    pub intro: Option<String>,
    /// Flavor line shown when the opponent goes down.
    #[cfg_attr(feature = "serde", serde(default))]
    pub defeat: Option<String>,
}

/// A live opponent. Spawned fresh per battle (or per wave, with scaled
/// hp) and discarded when the battle ends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentState {
    pub name: String,
    pub level: u32,
    pub hp: ResourceMeter,
    pub actions: Vec<AttackAction>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: StatusEffects,
}

impl OpponentState {
    /// Fresh instance at the template's base hp.
    pub fn from_template(template: &OpponentTemplate) -> Self {
        Self {
            name: template.name.clone(),
            level: template.level,
            hp: ResourceMeter::full(template.base_hp),
            actions: template.actions.clone(),
            effects: StatusEffects::empty(),
        }
    }

    /// Wave-scaled instance: `hp = base * (100 + scale% * wave) / 100`.
    pub fn from_template_scaled(
        template: &OpponentTemplate,
        wave: u32,
        config: &BattleConfig,
    ) -> Self {
        let scaled = template.base_hp * (100 + config.wave_hp_scale_percent * wave) / 100;
        Self {
            hp: ResourceMeter::full(scaled),
            ..Self::from_template(template)
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp.damage(amount);
    }
}

impl fmt::Display for OpponentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Lv.{})", self.name, self.level)
    }
}
