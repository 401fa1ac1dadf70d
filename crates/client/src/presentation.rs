//! Plain-text rendering of the battle state.

use duel_core::Battle;

/// Prints the log window and both participants' vitals.
///
/// Shows the most recent `window` log entries; the battle log itself is
/// never truncated.
pub fn render(battle: &Battle, window: usize) {
    println!();
    println!("##############Battle Log##############");
    for entry in battle.recent_log(window) {
        println!("{}", entry);
    }
    println!("######################################");

    if let (Some(player), Some(enemy)) = (battle.player(), battle.enemy()) {
        let player = player.snapshot();
        let enemy = enemy.snapshot();
        println!(
            "Player({}): {} HP\t\tEnemy({}): {} HP",
            player.name, player.current_hp, enemy.name, enemy.current_hp
        );
    }
    println!();
}

/// Prints the final defeat/victory pair.
pub fn render_outcome(battle: &Battle) {
    for entry in battle.recent_log(2) {
        println!("{}", entry);
    }
}
