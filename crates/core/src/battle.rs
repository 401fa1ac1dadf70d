//! The turn resolver: a two-participant battle state machine.
//!
//! [`Battle`] owns both characters, the append-only battle log, and the
//! injected random source. One exposed transition, [`Battle::resolve_turn`],
//! applies pre-action status overrides, dispatches the resolved action,
//! ticks cooldowns, swaps initiative, and checks for a terminal state —
//! in that order, every call.
//!
//! Two distinct pairings are tracked on purpose: `player`/`enemy` are fixed
//! identities (defeat and victory lines are worded by role), while
//! active/waiting is turn order, toggled after every resolved turn.

use crate::action::ActionType;
use crate::character::Character;
use crate::rng::RandomSource;

/// Turns a special ability stays unavailable after firing.
pub const SPECIAL_COOLDOWN_TURNS: u32 = 3;

/// Inclusive bounds of the attack damage jitter.
pub const ATTACK_JITTER_MIN: i32 = -5;
pub const ATTACK_JITTER_MAX: i32 = 10;

/// Fixed participant identity, independent of turn order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    Player,
    Enemy,
}

impl Role {
    /// The other participant.
    pub const fn opposite(self) -> Role {
        match self {
            Role::Player => Role::Enemy,
            Role::Enemy => Role::Player,
        }
    }
}

/// One match between two characters.
///
/// Exclusive to a single match and a single logical thread of control;
/// a finished or abandoned battle is simply dropped.
pub struct Battle {
    player: Option<Character>,
    enemy: Option<Character>,
    /// Whose turn resolves next. Toggling this IS the initiative swap;
    /// there is no separate turn-owner field.
    active: Role,
    turn: u32,
    log: Vec<String>,
    over: bool,
    rng: Box<dyn RandomSource>,
}

impl Battle {
    /// Creates an empty battle; resolving turns is a no-op until both
    /// participants are set.
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            player: None,
            enemy: None,
            active: Role::Player,
            turn: 0,
            log: Vec::new(),
            over: false,
            rng,
        }
    }

    /// Creates a battle with both participants set. The player has
    /// initiative on the first turn.
    pub fn with_participants(
        player: Character,
        enemy: Character,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let mut battle = Self::new(rng);
        battle.player = Some(player);
        battle.enemy = Some(enemy);
        battle
    }

    pub fn set_player(&mut self, character: Character) {
        self.player = Some(character);
    }

    pub fn set_enemy(&mut self, character: Character) {
        self.enemy = Some(character);
    }

    /// Resolves one turn for the active character.
    ///
    /// Silently no-ops while either participant is unset, so callers may
    /// drive the loop before setup completes. Otherwise the call always
    /// increments the turn counter by exactly one and swaps initiative,
    /// whatever branch the action takes.
    pub fn resolve_turn(&mut self, requested: ActionType) {
        let (active, waiting) = match self.active {
            Role::Player => (&mut self.player, &mut self.enemy),
            Role::Enemy => (&mut self.enemy, &mut self.player),
        };
        let (Some(actor), Some(target)) = (active.as_mut(), waiting.as_mut()) else {
            return;
        };

        let action = apply_status_overrides(actor, requested, &mut self.log, self.rng.as_mut());

        match action {
            ActionType::Attack => {
                resolve_attack(actor, target, &mut self.log, self.rng.as_mut());
            }
            ActionType::Defend => {
                actor.is_defending = true;
                self.log
                    .push(format!("{} takes a defensive stance!", actor.name));
            }
            ActionType::Special => {
                resolve_special(actor, target, &mut self.log);
            }
            ActionType::Skip => {
                self.log.push(format!("{} skips their turn!", actor.name));
            }
        }

        // Universal cooldown tick, regardless of which action fired.
        tick_cooldown(actor);
        tick_cooldown(target);

        self.turn += 1;
        self.active = self.active.opposite();

        self.check_win_condition();
    }

    /// Appends the defeat/victory pair and latches the terminal flag.
    ///
    /// Defeat messaging is worded by fixed role, not by whoever happens to
    /// be active after the swap. Idempotent: once the battle is over,
    /// further calls leave the log untouched.
    pub fn check_win_condition(&mut self) {
        if self.over {
            return;
        }
        let (Some(player), Some(enemy)) = (self.player.as_ref(), self.enemy.as_ref()) else {
            return;
        };

        if !player.is_alive() {
            self.log.push("You have been defeated!".to_string());
            self.log.push("Game Over!".to_string());
            self.over = true;
        } else if !enemy.is_alive() {
            self.log.push("The enemy has been defeated!".to_string());
            self.log.push("You win!".to_string());
            self.over = true;
        }
    }

    /// Terminal flag; set once, never cleared.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Resolved-turn counter, starting at 0.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The full append-only battle log.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// The most recent `n` log entries, for display windows. The log itself
    /// is never truncated.
    pub fn recent_log(&self, n: usize) -> &[String] {
        &self.log[self.log.len().saturating_sub(n)..]
    }

    /// Role acting on the next resolved turn.
    pub fn active_role(&self) -> Role {
        self.active
    }

    pub fn active_character(&self) -> Option<&Character> {
        self.by_role(self.active)
    }

    pub fn waiting_character(&self) -> Option<&Character> {
        self.by_role(self.active.opposite())
    }

    pub fn player(&self) -> Option<&Character> {
        self.player.as_ref()
    }

    pub fn enemy(&self) -> Option<&Character> {
        self.enemy.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Character> {
        self.player.as_mut()
    }

    pub fn enemy_mut(&mut self) -> Option<&mut Character> {
        self.enemy.as_mut()
    }

    fn by_role(&self, role: Role) -> Option<&Character> {
        match role {
            Role::Player => self.player.as_ref(),
            Role::Enemy => self.enemy.as_ref(),
        }
    }
}

/// Applies at most one pre-action override, in priority order.
///
/// Confusion wins over a forced skip; both are one-shot flags cleared the
/// turn they fire. A confused character's requested action is discarded in
/// favor of a uniform draw over the full action set.
fn apply_status_overrides(
    actor: &mut Character,
    requested: ActionType,
    log: &mut Vec<String>,
    rng: &mut dyn RandomSource,
) -> ActionType {
    if actor.confused {
        log.push(format!("{} is confused!", actor.name));
        actor.confused = false;
        let index = rng.range_i32(0, ActionType::COUNT as i32 - 1) as usize;
        ActionType::all()[index]
    } else if actor.skip_next_turn {
        actor.skip_next_turn = false;
        ActionType::Skip
    } else {
        requested
    }
}

/// Rolls jittered damage, clamps at zero, and logs exactly one line.
fn resolve_attack(
    attacker: &mut Character,
    defender: &mut Character,
    log: &mut Vec<String>,
    rng: &mut dyn RandomSource,
) {
    let jitter = rng.range_i32(ATTACK_JITTER_MIN, ATTACK_JITTER_MAX);
    let damage = (attacker.attack - defender.defense + jitter).max(0);
    let actual = defender.take_damage(damage);

    if actual > 0 {
        log.push(format!(
            "{} attacks {} for {} damage!",
            attacker.name, defender.name, actual
        ));
    } else {
        log.push(format!(
            "{} attacks {} but does no damage!",
            attacker.name, defender.name
        ));
    }
}

/// Fires the actor's archetype ability if the cooldown allows.
///
/// An archetype without an ability (Generic) still resets the cooldown and
/// logs the generic line; there is just no description line or effect.
fn resolve_special(actor: &mut Character, target: &mut Character, log: &mut Vec<String>) {
    if actor.special_cooldown == 0 {
        actor.special_cooldown = SPECIAL_COOLDOWN_TURNS;
        log.push(format!(
            "{} uses {}!",
            actor.name, actor.special_ability_name
        ));
        if let Some(ability) = actor.archetype.ability() {
            let description = (ability.effect)(actor, target);
            log.push(description);
        }
    } else {
        log.push(format!(
            "{} is still recharging their special ability!",
            actor.name
        ));
    }
}

fn tick_cooldown(character: &mut Character) {
    if character.special_cooldown > 0 {
        character.special_cooldown -= 1;
    }
}
