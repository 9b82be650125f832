//! Renders structured battle output to the terminal.
//!
//! The engine emits [`BattleEvent`] values; everything printable lives
//! here so the battle loop stays free of formatting.

use demon_core::{Actor, AttackAction, BattleEvent, OpponentState, PlayerState, ResourceMeter};

const BAR_WIDTH: usize = 20;

/// Renders one resolved turn's events, in emission order.
pub fn render_events(events: &[BattleEvent], opponent_name: &str) {
    for event in events {
        println!("{}", event_line(event, opponent_name));
    }
}

fn event_line(event: &BattleEvent, opponent: &str) -> String {
    match event {
        BattleEvent::AttackUsed {
            actor: Actor::Player,
            name,
        } => format!("You use {name}!"),
        BattleEvent::AttackUsed {
            actor: Actor::Opponent,
            name,
        } => format!("{opponent} uses {name}!"),
        BattleEvent::FlavorText { text } => format!("  \"{text}\""),

        BattleEvent::Hit {
            actor: Actor::Player,
            damage,
        } => format!("It hits for {damage} damage!"),
        BattleEvent::Hit {
            actor: Actor::Opponent,
            damage,
        } => format!("You take {damage} damage!"),
        BattleEvent::CriticalHit {
            actor: Actor::Player,
            damage,
        } => format!("CRITICAL HIT! {damage} damage!"),
        BattleEvent::CriticalHit {
            actor: Actor::Opponent,
            damage,
        } => format!("CRITICAL! You take {damage} damage!"),
        BattleEvent::Miss {
            actor: Actor::Player,
            flavor,
        } => format!("You miss! ({flavor})"),
        BattleEvent::Miss {
            actor: Actor::Opponent,
            ..
        } => "You dodge it!".to_string(),
        BattleEvent::Rested {
            actor: Actor::Player,
        } => "You take a moment to recover.".to_string(),
        BattleEvent::Rested {
            actor: Actor::Opponent,
        } => format!("{opponent} bides its time."),

        BattleEvent::StatusApplied {
            target: Actor::Player,
            kind,
        } => format!("You are afflicted with {kind}!"),
        BattleEvent::StatusApplied {
            target: Actor::Opponent,
            kind,
        } => format!("{opponent} is afflicted with {kind}!"),
        BattleEvent::StatusRefreshed { target, kind } => match target {
            Actor::Player => format!("Your {kind} lingers on."),
            Actor::Opponent => format!("The {kind} on {opponent} lingers on."),
        },
        BattleEvent::StatusExpired { target, kind } => match target {
            Actor::Player => format!("Your {kind} wears off."),
            Actor::Opponent => format!("The {kind} on {opponent} wears off."),
        },
        BattleEvent::PoisonTick {
            target: Actor::Player,
            damage,
        } => format!("Poison burns you for {damage} damage."),
        BattleEvent::PoisonTick {
            target: Actor::Opponent,
            damage,
        } => format!("{opponent} takes {damage} poison damage."),
        BattleEvent::Stunned {
            target: Actor::Player,
        } => "You are stunned and lose your turn!".to_string(),
        BattleEvent::Stunned {
            target: Actor::Opponent,
        } => format!("{opponent} is stunned and can't act!"),

        BattleEvent::SanityDrained { amount } => format!("Your sanity slips by {amount}..."),
        BattleEvent::SanityCrisis { damage } => {
            format!("Your mind unravels! You take {damage} damage!")
        }

        BattleEvent::FleeSucceeded => "You run away to fight another day.".to_string(),
        BattleEvent::FleeFailed => "You can't escape!".to_string(),
        BattleEvent::FleeBlocked => "There is nowhere to run!".to_string(),

        BattleEvent::WaveCleared { wave, xp_gained } => {
            format!("=== Wave {wave} cleared! +{xp_gained} XP ===")
        }
        BattleEvent::WaveSpawned { wave, name, hp } => {
            format!("=== Wave {wave}: {name} approaches with {hp} HP! ===")
        }
    }
}

/// Side-by-side readout of both combatants, printed before each prompt.
pub fn status_panel(player: &PlayerState, opponent: &OpponentState) {
    println!();
    println!(
        "{}  HP {}  EN {}  SAN {}",
        player,
        bar(&player.hp),
        bar(&player.energy),
        bar(&player.sanity)
    );
    println!("{}  HP {}", opponent, bar(&opponent.hp));
    println!();
}

fn bar(meter: &ResourceMeter) -> String {
    let filled = if meter.maximum == 0 {
        0
    } else {
        (meter.current as usize * BAR_WIDTH).div_ceil(meter.maximum as usize)
    }
    .min(BAR_WIDTH);
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        meter.current,
        meter.maximum
    )
}

/// Numbered move menu plus the flee option.
pub fn move_menu(attacks: &[AttackAction], flee_allowed: bool) {
    for (i, attack) in attacks.iter().enumerate() {
        println!("  {}) {} - {}", i + 1, attack, attack.description);
    }
    if flee_allowed {
        println!("  f) Flee");
    }
}

/// Out-of-battle character sheet.
pub fn stats(player: &PlayerState, xp_threshold: u32) {
    println!();
    println!("── {} ──", player);
    println!("  XP: {}/{}", player.experience, xp_threshold);
    println!("  Max HP {} | Energy {} | Sanity {}", player.hp.maximum, player.energy.maximum, player.sanity.maximum);
    println!("  Record: {} wins / {} losses", player.wins, player.losses);
    if player.defeated.is_empty() {
        println!("  Demons bested: none yet");
    } else {
        let names: Vec<_> = player.defeated.iter().cloned().collect();
        println!("  Demons bested: {}", names.join(", "));
    }
    println!();
}
