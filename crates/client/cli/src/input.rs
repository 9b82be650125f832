//! Line-based terminal input helpers.

use std::io::{self, Write};

use demon_core::ActionChoice;

/// Prints a prompt and reads one trimmed line from stdin.
pub fn prompt(text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parses a battle menu selection: a 1-based move number, or `f` to flee.
pub fn parse_choice(input: &str, move_count: usize) -> Option<ActionChoice> {
    if input.eq_ignore_ascii_case("f") {
        return Some(ActionChoice::Flee);
    }
    let number: usize = input.parse().ok()?;
    if (1..=move_count).contains(&number) {
        Some(ActionChoice::Attack(number - 1))
    } else {
        None
    }
}
