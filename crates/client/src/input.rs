//! Human input collaborator: validated action selection from stdin.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use duel_core::{ActionType, Character};
use duel_runtime::{ActionProvider, Result, RuntimeError};

/// Prompts on stdout and reads one validated action from stdin.
///
/// Only Attack, Defend, and Special are offered; Skip is imposed by the
/// resolver's status overrides, never requested by a human. Invalid lines
/// are re-prompted here and never reach the runner.
#[derive(Debug, Default)]
pub struct StdinActionProvider;

impl ActionProvider for StdinActionProvider {
    fn provide_action(&mut self, _actor: &Character) -> Result<ActionType> {
        let stdin = io::stdin();
        let mut line = String::new();

        println!("Select an action:");
        println!("1. Attack");
        println!("2. Defend");
        println!("3. Special");

        loop {
            print!("Enter the number of your choice: ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(RuntimeError::InputClosed);
            }

            match parse_action(line.trim()) {
                Some(action) => return Ok(action),
                None => println!("Invalid input. Please try again."),
            }
        }
    }
}

/// Accepts the menu number or a case-insensitive action name.
fn parse_action(input: &str) -> Option<ActionType> {
    let action = match input {
        "1" => ActionType::Attack,
        "2" => ActionType::Defend,
        "3" => ActionType::Special,
        other => ActionType::from_str(other).ok()?,
    };
    // Skip cannot be requested directly.
    (action != ActionType::Skip).then_some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_map_to_the_menu_order() {
        assert_eq!(parse_action("1"), Some(ActionType::Attack));
        assert_eq!(parse_action("2"), Some(ActionType::Defend));
        assert_eq!(parse_action("3"), Some(ActionType::Special));
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(parse_action("attack"), Some(ActionType::Attack));
        assert_eq!(parse_action("Defend"), Some(ActionType::Defend));
        assert_eq!(parse_action("SPECIAL"), Some(ActionType::Special));
    }

    #[test]
    fn skip_and_garbage_are_rejected() {
        assert_eq!(parse_action("skip"), None);
        assert_eq!(parse_action("4"), None);
        assert_eq!(parse_action(""), None);
        assert_eq!(parse_action("fireball"), None);
    }
}
