//! Character stats, status flags, and progression.

use crate::archetype::Archetype;

/// Experience threshold consumed by each level-up.
pub const XP_PER_LEVEL: u32 = 100;

/// Stat growth applied by a single level-up.
pub const LEVEL_HP_BONUS: i32 = 10;
pub const LEVEL_ATTACK_BONUS: i32 = 2;
pub const LEVEL_DEFENSE_BONUS: i32 = 1;

/// Divisor applied to incoming damage while defending.
pub const DEFEND_DAMAGE_DIVISOR: i32 = 2;

/// One combat participant's full mutable state.
///
/// Created at selection time, mutated only by the turn resolver and its own
/// methods for the duration of a single match, then discarded. Nothing here
/// persists across matches.
///
/// # Invariants
///
/// - `current_hp <= max_hp` at all times; `current_hp` may go negative,
///   and "alive" is defined purely by the strict `> 0` check.
/// - `experience < 100` whenever no level-up is pending; a single large
///   gain performs one level-up per 100 points accumulated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub archetype: Archetype,
    pub player_controlled: bool,

    // === Vitals ===
    pub max_hp: i32,
    pub current_hp: i32,

    // === Combat stats (mutated only by leveling) ===
    pub attack: i32,
    pub defense: i32,

    // === Progression ===
    pub experience: u32,
    pub level: u32,

    // === Transient combat state (one-shot flags and timers) ===
    /// Cleared the instant it absorbs one hit.
    pub is_defending: bool,
    /// Turns remaining before `Special` may fire again.
    pub special_cooldown: u32,
    /// Forces one random action override, then clears.
    pub confused: bool,
    /// Forces one skipped turn, then clears.
    pub skip_next_turn: bool,

    /// Name printed in the generic "uses ...!" log line; empty for
    /// [`Archetype::Generic`].
    pub special_ability_name: String,
}

impl Character {
    /// Creates a generic character with caller-supplied stats.
    ///
    /// Named archetypes are built through [`Archetype::instantiate`]
    /// instead, which fixes the base stats and ability name.
    pub fn new(
        name: impl Into<String>,
        attack: i32,
        defense: i32,
        hp: i32,
        player_controlled: bool,
    ) -> Self {
        Self {
            name: name.into(),
            archetype: Archetype::Generic,
            player_controlled,
            max_hp: hp,
            current_hp: hp,
            attack,
            defense,
            experience: 0,
            level: 1,
            is_defending: false,
            special_cooldown: 0,
            confused: false,
            skip_next_turn: false,
            special_ability_name: String::new(),
        }
    }

    /// Applies incoming damage and returns the amount actually subtracted.
    ///
    /// A defending character absorbs the hit at half value (integer floor)
    /// and stops defending, whatever the incoming amount was. HP is not
    /// floored at zero.
    pub fn take_damage(&mut self, damage: i32) -> i32 {
        let actual = if self.is_defending {
            self.is_defending = false;
            damage / DEFEND_DAMAGE_DIVISOR
        } else {
            damage
        };

        self.current_hp -= actual;
        actual
    }

    /// Restores HP, clamped to `max_hp`.
    pub fn heal(&mut self, amount: i32) {
        self.current_hp = (self.current_hp + amount).min(self.max_hp);
    }

    /// Strictly-greater-than-zero liveness check.
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Adds experience, performing one level-up per full 100 points.
    ///
    /// Each level-up raises level, max HP, attack, and defense, and refills
    /// `current_hp` to the new maximum.
    pub fn gain_experience(&mut self, amount: u32) {
        self.experience += amount;
        while self.experience >= XP_PER_LEVEL {
            self.level_up();
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.experience -= XP_PER_LEVEL;
        self.max_hp += LEVEL_HP_BONUS;
        self.current_hp = self.max_hp;
        self.attack += LEVEL_ATTACK_BONUS;
        self.defense += LEVEL_DEFENSE_BONUS;
    }

    /// Read-only view for presentation layers.
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            name: self.name.clone(),
            current_hp: self.current_hp,
            max_hp: self.max_hp,
            level: self.level,
        }
    }
}

/// Presentation snapshot of a character's public state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSnapshot {
    pub name: String,
    pub current_hp: i32,
    pub max_hp: i32,
    pub level: u32,
}
