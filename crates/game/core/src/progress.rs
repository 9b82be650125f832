//! Progression: converting a beaten opponent into experience and levels.

use crate::config::BattleConfig;
use crate::state::{OpponentState, PlayerState};

/// What a victory earned the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryReward {
    pub xp_gained: u32,
    pub leveled_up: bool,
    pub new_level: u32,
}

/// Applies the full victory bookkeeping: xp award, level-ups, win count,
/// and the (idempotent) defeated-opponent record.
pub fn award_victory(
    player: &mut PlayerState,
    opponent: &OpponentState,
    config: &BattleConfig,
) -> VictoryReward {
    let xp_gained = opponent.level * config.xp_per_level;
    let levels = player.gain_xp(xp_gained, config);
    player.wins += 1;
    player.record_victory(&opponent.name);

    VictoryReward {
        xp_gained,
        leveled_up: levels > 0,
        new_level: player.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OpponentTemplate;

    fn level_one_opponent() -> OpponentState {
        OpponentState::from_template(&OpponentTemplate {
            name: "Alarm Clock".into(),
            level: 1,
            base_hp: 60,
            actions: Vec::new(),
            intro: None,
            defeat: None,
        })
    }

    #[test]
    fn crossing_the_threshold_levels_up() {
        let config = BattleConfig::default();
        let mut player = PlayerState::new("Student");
        player.experience = 90;

        // 90 + 20 = 110 >= 100: level 2, 10 xp carried over.
        let reward = award_victory(&mut player, &level_one_opponent(), &config);

        assert_eq!(reward.xp_gained, 20);
        assert!(reward.leveled_up);
        assert_eq!(reward.new_level, 2);
        assert_eq!(player.experience, 10);
        assert_eq!(player.hp.maximum, BattleConfig::STARTING_HP + 10);
        assert_eq!(player.energy.maximum, BattleConfig::STARTING_ENERGY + 5);
        assert_eq!(player.sanity.maximum, BattleConfig::STARTING_SANITY + 5);
        assert_eq!(player.wins, 1);
        assert!(player.defeated.contains("Alarm Clock"));
    }

    #[test]
    fn one_award_can_jump_multiple_levels() {
        let config = BattleConfig::default();
        let mut player = PlayerState::new("Student");

        // Level 30 opponent: 600 xp. Thresholds 100 + 200 + 300 = 600.
        let mut big = level_one_opponent();
        big.level = 30;
        let reward = award_victory(&mut player, &big, &config);

        assert_eq!(reward.xp_gained, 600);
        assert_eq!(reward.new_level, 4);
        assert_eq!(player.experience, 0);
        assert_eq!(player.hp.maximum, BattleConfig::STARTING_HP + 30);
    }

    #[test]
    fn below_threshold_no_level() {
        let config = BattleConfig::default();
        let mut player = PlayerState::new("Student");
        let reward = award_victory(&mut player, &level_one_opponent(), &config);

        assert!(!reward.leveled_up);
        assert_eq!(reward.new_level, 1);
        assert_eq!(player.experience, 20);
    }
}
