//! Top-level application flow: selection, match loop, presentation.

use anyhow::Result;

use duel_core::{Battle, ChaChaSource};
use duel_runtime::{DefaultPolicy, MatchRunner};

use crate::config::CliConfig;
use crate::input::StdinActionProvider;
use crate::{presentation, selection};

pub fn run(config: CliConfig) -> Result<()> {
    tracing::info!(seed = config.seed, "starting match");

    // One seeded stream drives the whole match: the opponent draw consumes
    // the first value, then the battle takes ownership of the source. The
    // enemy policy gets its own derived stream.
    let mut rng = ChaChaSource::seeded(config.seed);

    let player = selection::choose_player_character()?;
    let enemy = selection::choose_opponent(&mut rng, config.opponent);

    println!("You have selected {} as your character.", player.name);
    println!("Your opponent will be {}.", enemy.name);

    let battle = Battle::with_participants(player, enemy, Box::new(rng));

    let mut runner = MatchRunner::builder()
        .battle(battle)
        .player_provider(StdinActionProvider)
        .enemy_provider(DefaultPolicy::seeded(config.seed.wrapping_add(1)))
        .build()?;

    println!("Battle Start!");
    while !runner.battle().is_over() {
        presentation::render(runner.battle(), config.log_window);
        runner.step()?;
    }
    presentation::render_outcome(runner.battle());

    Ok(())
}
