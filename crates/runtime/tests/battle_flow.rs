//! End-to-end battle flows through the session layer, driven by shipped
//! content and a scripted oracle so every roll is accounted for.

use demon_content::{AttackRegistry, DemonRegistry};
use demon_core::{ActionChoice, BattleOutcome, PlayerState, ScriptedRng};
use demon_runtime::{BattleSession, RuntimeError, SurvivalSession};

#[test]
fn full_battle_against_the_alarm_clock() {
    let attacks = AttackRegistry::load().expect("attack data should parse");
    let demons = DemonRegistry::load().expect("demon data should parse");
    let alarm_clock = demons
        .by_name("Alarm Clock")
        .expect("roster should include the Alarm Clock");

    // Turn 1, "Actually Study" (45 power): hit 50, variance 0, no crit
    // (60 -> 15 hp); opponent picks move 0, hit roll 90 misses.
    // Turn 2: same attack lands again and finishes it.
    let rng = ScriptedRng::new([49, 5, 49, 0, 89, 49, 5, 49]);
    let player = PlayerState::new("Student");
    let mut session =
        BattleSession::with_rng(player, attacks.all().to_vec(), alarm_clock, None, rng);

    let study = session
        .attacks()
        .iter()
        .position(|a| a.name == "Actually Study")
        .expect("move list should include Actually Study");

    let report = session.resolve_turn(ActionChoice::Attack(study)).unwrap();
    assert!(report.outcome.is_none());
    assert_eq!(session.opponent().hp.current, 15);
    assert_eq!(session.round(), 2);

    let report = session.resolve_turn(ActionChoice::Attack(study)).unwrap();
    let Some(BattleOutcome::Victory(reward)) = report.outcome else {
        panic!("expected victory, got {:?}", report.outcome);
    };
    // Level 3 demon: 60 xp, below the level-1 threshold of 100.
    assert_eq!(reward.xp_gained, 60);
    assert!(!reward.leveled_up);
    assert_eq!(session.outcome(), Some(BattleOutcome::Victory(reward)));

    let player = session.into_player();
    assert_eq!(player.wins, 1);
    assert_eq!(player.experience, 60);
    assert!(player.defeated.contains("Alarm Clock"));
}

#[test]
fn finished_session_rejects_further_turns() {
    let attacks = AttackRegistry::load().unwrap();
    let demons = DemonRegistry::load().unwrap();
    let alarm_clock = demons.by_name("Alarm Clock").unwrap();

    // Immediate flee: roll 50 <= 50 succeeds.
    let rng = ScriptedRng::new([49]);
    let player = PlayerState::new("Student");
    let mut session =
        BattleSession::with_rng(player, attacks.all().to_vec(), alarm_clock, None, rng);

    let report = session.resolve_turn(ActionChoice::Flee).unwrap();
    assert_eq!(report.outcome, Some(BattleOutcome::Fled));

    let err = session.resolve_turn(ActionChoice::Flee).unwrap_err();
    assert!(matches!(err, RuntimeError::BattleOver));
}

#[test]
fn rejected_turn_leaves_the_session_usable() {
    let attacks = AttackRegistry::load().unwrap();
    let demons = DemonRegistry::load().unwrap();
    let alarm_clock = demons.by_name("Alarm Clock").unwrap();

    let rng = ScriptedRng::new([]);
    let player = PlayerState::new("Student");
    let mut session =
        BattleSession::with_rng(player, attacks.all().to_vec(), alarm_clock, None, rng);

    let err = session.resolve_turn(ActionChoice::Attack(99)).unwrap_err();
    assert!(matches!(err, RuntimeError::Turn(_)));
    assert_eq!(session.round(), 1);
    assert!(session.outcome().is_none());
}

#[test]
fn survival_session_rolls_waves_and_accumulates_xp() {
    let attacks = AttackRegistry::load().unwrap();
    let demons = DemonRegistry::load().unwrap();
    // Single-entry roster keeps the wave sampling deterministic without
    // spending draws.
    let roster = vec![demons.by_name("Alarm Clock").unwrap().clone()];

    // Wave 1 spawns at 60 * 115 / 100 = 69 hp.
    // Turn 1: study hits for 45 (69 -> 24); opponent move 0 misses.
    // Turn 2: study finishes the wave; wave 2 spawns at 60 * 130 / 100.
    let rng = ScriptedRng::new([49, 5, 49, 0, 89, 49, 5, 49]);
    let player = PlayerState::new("Student");
    let mut session = SurvivalSession::with_rng(player, attacks.all().to_vec(), roster, rng);

    assert_eq!(session.wave(), 1);
    assert_eq!(session.opponent().hp.current, 69);

    let study = session
        .attacks()
        .iter()
        .position(|a| a.name == "Actually Study")
        .unwrap();

    let report = session.resolve_turn(ActionChoice::Attack(study)).unwrap();
    assert!(report.outcome.is_none());
    assert_eq!(session.opponent().hp.current, 24);

    let report = session.resolve_turn(ActionChoice::Attack(study)).unwrap();
    // The victory is absorbed into wave bookkeeping, not a terminal.
    assert!(report.outcome.is_none());
    assert!(!session.is_over());
    assert_eq!(session.wave(), 2);
    assert_eq!(session.waves_cleared(), 1);
    assert_eq!(session.total_xp(), 60);
    assert_eq!(session.opponent().hp.current, 78);
}
