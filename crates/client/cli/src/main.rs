//! Terminal client entry point.
mod battle;
mod input;
mod presentation;

use anyhow::{Context, Result};
use demon_content::{AttackRegistry, DemonRegistry};
use demon_core::PcgRng;
use demon_runtime::SaveRepository;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Game text goes to stdout; logs stay on stderr so they can be
    // redirected away.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let attacks = AttackRegistry::load().context("loading move list")?;
    let demons = DemonRegistry::load().context("loading demon roster")?;
    let saves = SaveRepository::open_default().context("opening save directory")?;

    println!("╔══════════════════════════════════════╗");
    println!("║   DAILY DEMONS: a battle for sanity  ║");
    println!("╚══════════════════════════════════════╝");

    let name = loop {
        let name = input::prompt("What's your name, student? ")?;
        if !name.is_empty() {
            break name;
        }
    };
    let mut player = saves.load_or_create(&name);
    println!("Welcome, {}!", player);

    loop {
        println!();
        println!("1) Quick battle   2) Choose your demon   3) Survival   4) Stats   5) Quit");
        match input::prompt("> ")?.as_str() {
            "1" => {
                let mut rng = PcgRng::from_seed(rand::random());
                let template = demons.sample(&mut rng).clone();
                let modifiers = battle::prompt_difficulty()?;
                player = battle::run_battle(player, attacks.all().to_vec(), &template, modifiers)?;
                saves.save(&player)?;
            }
            "2" => {
                println!();
                for (i, demon) in demons.all().iter().enumerate() {
                    let beaten = if player.defeated.contains(&demon.name) {
                        " [beaten]"
                    } else {
                        ""
                    };
                    println!(
                        "  {}) {} (Lv.{}, {} HP){}",
                        i + 1,
                        demon.name,
                        demon.level,
                        demon.base_hp,
                        beaten
                    );
                }
                let line = input::prompt("Which demon? ")?;
                let Some(template) = line
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| demons.get(i))
                    .cloned()
                else {
                    println!("No such demon.");
                    continue;
                };
                let modifiers = battle::prompt_difficulty()?;
                player = battle::run_battle(player, attacks.all().to_vec(), &template, modifiers)?;
                saves.save(&player)?;
            }
            "3" => {
                player =
                    battle::run_survival(player, attacks.all().to_vec(), demons.all().to_vec())?;
                saves.save(&player)?;
            }
            "4" => presentation::stats(&player, battle::next_threshold(&player)),
            "5" | "q" => {
                saves.save(&player)?;
                println!("Your progress is saved. The demons will wait.");
                return Ok(());
            }
            _ => println!("Pick 1-5."),
        }
    }
}
