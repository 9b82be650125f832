//! Interactive battle loops over runtime sessions.

use anyhow::Result;
use demon_core::{
    BattleConfig, BattleOutcome, DifficultyModifiers, OpponentTemplate, PlayerState,
};
use demon_runtime::{BattleSession, RuntimeError, SurvivalSession};

use crate::input;
use crate::presentation;

/// Runs one battle to its end and hands the player back.
pub fn run_battle(
    player: PlayerState,
    attacks: Vec<demon_core::AttackAction>,
    template: &OpponentTemplate,
    modifiers: Option<DifficultyModifiers>,
) -> Result<PlayerState> {
    println!();
    println!("A wild {} appears!", template.name);
    if let Some(intro) = &template.intro {
        println!("  \"{intro}\"");
    }

    let mut session = BattleSession::new(player, attacks, template, modifiers, None);

    loop {
        presentation::status_panel(session.player(), session.opponent());
        presentation::move_menu(session.attacks(), true);

        let line = input::prompt("> ")?;
        let Some(choice) = input::parse_choice(&line, session.attacks().len()) else {
            println!("Pick a move number or f to flee.");
            continue;
        };

        let opponent_name = session.opponent().name.clone();
        match session.resolve_turn(choice) {
            Ok(report) => {
                presentation::render_events(&report.events, &opponent_name);
                if report.outcome.is_some() {
                    break;
                }
            }
            Err(RuntimeError::Turn(err)) => {
                println!("{err}");
            }
            Err(err) => return Err(err.into()),
        }
    }

    match session.outcome() {
        Some(BattleOutcome::Victory(reward)) => {
            println!();
            println!("{} is vanquished!", template.name);
            if let Some(defeat) = &template.defeat {
                println!("  \"{defeat}\"");
            }
            println!("You gained {} XP.", reward.xp_gained);
            if reward.leveled_up {
                println!("LEVEL UP! You are now level {}.", reward.new_level);
            }
        }
        Some(BattleOutcome::Defeat) => {
            println!();
            println!("{} got the better of you today.", template.name);
            println!("Rest up and try again.");
        }
        Some(BattleOutcome::Fled) | None => {}
    }

    Ok(session.into_player())
}

/// Runs a survival gauntlet until defeat and hands the player back.
pub fn run_survival(
    player: PlayerState,
    attacks: Vec<demon_core::AttackAction>,
    roster: Vec<OpponentTemplate>,
) -> Result<PlayerState> {
    println!();
    println!("SURVIVAL MODE: the demons keep coming, and there is no escape.");
    println!("Each wave hits harder. How long can you last?");

    let mut session = SurvivalSession::new(player, attacks, roster, None);
    println!();
    println!(
        "Wave 1: {} approaches with {} HP!",
        session.opponent().name,
        session.opponent().hp.current
    );

    while !session.is_over() {
        presentation::status_panel(session.player(), session.opponent());
        presentation::move_menu(session.attacks(), false);

        let line = input::prompt("> ")?;
        let Some(choice) = input::parse_choice(&line, session.attacks().len()) else {
            println!("Pick a move number.");
            continue;
        };

        let opponent_name = session.opponent().name.clone();
        match session.resolve_turn(choice) {
            Ok(report) => presentation::render_events(&report.events, &opponent_name),
            Err(RuntimeError::Turn(err)) => println!("{err}"),
            Err(err) => return Err(err.into()),
        }
    }

    println!();
    println!(
        "The run ends at wave {}. Waves cleared: {}, XP banked: {}.",
        session.wave(),
        session.waves_cleared(),
        session.total_xp()
    );

    Ok(session.into_player())
}

/// Difficulty prompt before a battle; empty input means normal.
pub fn prompt_difficulty() -> Result<Option<DifficultyModifiers>> {
    println!("Difficulty: 1) Normal  2) Easier  3) Harder");
    let line = input::prompt("> ")?;
    Ok(match line.as_str() {
        "2" => Some(DifficultyModifiers::easier()),
        "3" => Some(DifficultyModifiers::harder()),
        _ => None,
    })
}

/// XP needed for the player's next level.
pub fn next_threshold(player: &PlayerState) -> u32 {
    player.level * BattleConfig::default().level_threshold_base
}
