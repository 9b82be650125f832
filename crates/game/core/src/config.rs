/// Balance constants and tunable parameters for combat resolution.
///
/// Every magic number in the engine lives here so front ends (and tests)
/// can rebalance without touching resolution code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    // ===== attack resolution =====
    /// Percent chance for any connecting hit to crit.
    pub crit_chance: u32,
    /// Damage multiplier applied on a critical hit.
    pub crit_multiplier: u32,
    /// Damage variance for player attacks: power ± spread.
    pub player_damage_spread: i32,
    /// Damage variance for opponent attacks. Narrower than the player's,
    /// an asymmetry carried over from the original balance.
    pub opponent_damage_spread: i32,
    /// Floor for a connecting hit before weaken is applied.
    pub minimum_hit_damage: u32,

    // ===== turn flow =====
    /// Percent chance that a flee attempt succeeds.
    pub flee_chance: u32,
    /// Sanity drained from the player on every opponent hit (inclusive).
    pub sanity_drain_min: u32,
    pub sanity_drain_max: u32,
    /// Unavoidable crisis damage while the player's sanity sits at zero.
    pub crisis_damage_min: u32,
    pub crisis_damage_max: u32,

    // ===== progression =====
    /// Experience awarded per opponent level on victory.
    pub xp_per_level: u32,
    /// Experience needed for the next level is `level * level_threshold_base`.
    pub level_threshold_base: u32,
    /// Permanent maximum gains per level-up.
    pub level_up_hp_gain: u32,
    pub level_up_energy_gain: u32,
    pub level_up_sanity_gain: u32,

    // ===== survival waves =====
    /// Additional opponent hp percent per wave: `base * (100 + p * wave) / 100`.
    pub wave_hp_scale_percent: u32,
    /// Partial recovery granted between waves (not a full reset).
    pub wave_recovery_hp: u32,
    pub wave_recovery_energy: u32,
    pub wave_recovery_sanity: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum simultaneous status effects per combatant. One per kind is
    /// enforced elsewhere; the cap just bounds the storage.
    pub const MAX_STATUS_EFFECTS: usize = 4;

    // ===== fresh-character defaults =====
    pub const STARTING_HP: u32 = 100;
    pub const STARTING_ENERGY: u32 = 100;
    pub const STARTING_SANITY: u32 = 100;

    pub fn new() -> Self {
        Self {
            crit_chance: 10,
            crit_multiplier: 2,
            player_damage_spread: 5,
            opponent_damage_spread: 3,
            minimum_hit_damage: 1,
            flee_chance: 50,
            sanity_drain_min: 2,
            sanity_drain_max: 8,
            crisis_damage_min: 10,
            crisis_damage_max: 20,
            xp_per_level: 20,
            level_threshold_base: 100,
            level_up_hp_gain: 10,
            level_up_energy_gain: 5,
            level_up_sanity_gain: 5,
            wave_hp_scale_percent: 15,
            wave_recovery_hp: 30,
            wave_recovery_energy: 20,
            wave_recovery_sanity: 20,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
