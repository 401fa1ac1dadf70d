//! Character selection menu.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

use duel_core::{Archetype, Character, RandomSource};

/// Prompts the player to pick an archetype from the roster.
///
/// Re-prompts until a valid menu number is entered; a closed stdin aborts
/// selection with an error.
pub fn choose_player_character() -> Result<Character> {
    let roster = Archetype::roster();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        println!("Select a character:");
        for (index, archetype) in roster.iter().enumerate() {
            println!("{}. {}", index + 1, archetype.display_name());
        }
        print!("Enter the number of your choice: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("input stream closed during character selection");
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=roster.len()).contains(&choice) => {
                return Ok(roster[choice - 1].instantiate(true));
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// Picks the opponent: forced by configuration, or drawn from the roster.
pub fn choose_opponent(rng: &mut dyn RandomSource, forced: Option<Archetype>) -> Character {
    let archetype = forced.unwrap_or_else(|| {
        let roster = Archetype::roster();
        let index = rng.range_i32(0, roster.len() as i32 - 1) as usize;
        roster[index]
    });
    archetype.instantiate(false)
}
