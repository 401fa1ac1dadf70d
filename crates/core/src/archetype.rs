//! Archetype catalog: base stats and special abilities.
//!
//! The three named fighters differ only in base stats (shared) and one
//! ability function, so they are represented as a tag carried by
//! [`Character`] with ability dispatch through a capability table rather
//! than an inheritance chain.

use crate::character::Character;

/// Base stats shared by every named archetype.
pub const BASE_ATTACK: i32 = 20;
pub const BASE_DEFENSE: i32 = 10;
pub const BASE_HP: i32 = 100;

/// Amount restored by the Memory Safety ability.
pub const MEMORY_SAFETY_HEAL: i32 = 30;

/// Character template tag.
///
/// `Generic` is the ability-less archetype used for caller-built
/// characters; the named archetypes carry one special ability each.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Archetype {
    /// No special ability, caller-supplied stats.
    #[default]
    #[strum(serialize = "generic")]
    Generic,
    /// Confuses the target with a Memory Leak.
    #[strum(serialize = "c++", serialize = "cpp")]
    Cpp,
    /// Locks the target out of their next turn.
    #[strum(serialize = "python")]
    Python,
    /// Heals itself through Memory Safety.
    #[strum(serialize = "rust")]
    Rust,
}

/// One entry of the ability catalog.
///
/// `effect` mutates actor and/or target and returns the description line
/// the resolver appends after the generic "uses ...!" line.
#[derive(Clone, Copy)]
pub struct Ability {
    pub name: &'static str,
    pub effect: fn(&mut Character, &mut Character) -> String,
}

impl Archetype {
    /// The named archetypes offered at character selection.
    pub const fn roster() -> [Archetype; 3] {
        [Archetype::Cpp, Archetype::Python, Archetype::Rust]
    }

    /// Human-readable name, used as the character name in battle logs.
    pub const fn display_name(self) -> &'static str {
        match self {
            Archetype::Generic => "Generic",
            Archetype::Cpp => "C++",
            Archetype::Python => "Python",
            Archetype::Rust => "Rust",
        }
    }

    /// Looks up this archetype's special ability, if it has one.
    pub fn ability(self) -> Option<Ability> {
        match self {
            Archetype::Generic => None,
            Archetype::Cpp => Some(Ability {
                name: "Memory Leak",
                effect: memory_leak,
            }),
            Archetype::Python => Some(Ability {
                name: "Global Interpreter Lock",
                effect: interpreter_lock,
            }),
            Archetype::Rust => Some(Ability {
                name: "Memory Safety",
                effect: memory_safety,
            }),
        }
    }

    /// Builds a combat-ready character from this template.
    ///
    /// Named archetypes get the shared base stats; `Generic` gets them too,
    /// though callers wanting custom stats should use [`Character::new`].
    pub fn instantiate(self, player_controlled: bool) -> Character {
        let mut character = Character::new(
            self.display_name(),
            BASE_ATTACK,
            BASE_DEFENSE,
            BASE_HP,
            player_controlled,
        );
        character.archetype = self;
        character.special_ability_name = self
            .ability()
            .map_or_else(String::new, |ability| ability.name.to_string());
        character
    }
}

fn memory_leak(actor: &mut Character, target: &mut Character) -> String {
    target.confused = true;
    format!("{} causes {} to be confused!", actor.name, target.name)
}

fn interpreter_lock(_actor: &mut Character, target: &mut Character) -> String {
    target.skip_next_turn = true;
    format!("{} skips their next turn!", target.name)
}

fn memory_safety(actor: &mut Character, _target: &mut Character) -> String {
    actor.heal(MEMORY_SAFETY_HEAL);
    format!("{} heals {} HP!", actor.name, MEMORY_SAFETY_HEAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_archetypes_share_base_stats() {
        for archetype in Archetype::roster() {
            let character = archetype.instantiate(false);
            assert_eq!(character.attack, BASE_ATTACK);
            assert_eq!(character.defense, BASE_DEFENSE);
            assert_eq!(character.max_hp, BASE_HP);
            assert_eq!(character.current_hp, BASE_HP);
            assert!(!character.special_ability_name.is_empty());
        }
    }

    #[test]
    fn generic_archetype_has_no_ability() {
        assert!(Archetype::Generic.ability().is_none());
        let character = Character::new("Test", 10, 5, 100, true);
        assert_eq!(character.special_ability_name, "");
    }

    #[test]
    fn memory_leak_confuses_the_target() {
        let mut actor = Archetype::Cpp.instantiate(true);
        let mut target = Archetype::Rust.instantiate(false);
        let ability = Archetype::Cpp.ability().unwrap();

        let line = (ability.effect)(&mut actor, &mut target);

        assert!(target.confused);
        assert_eq!(line, "C++ causes Rust to be confused!");
    }

    #[test]
    fn interpreter_lock_forces_a_skipped_turn() {
        let mut actor = Archetype::Python.instantiate(true);
        let mut target = Archetype::Cpp.instantiate(false);
        let ability = Archetype::Python.ability().unwrap();

        let line = (ability.effect)(&mut actor, &mut target);

        assert!(target.skip_next_turn);
        assert_eq!(line, "C++ skips their next turn!");
    }

    #[test]
    fn memory_safety_heal_respects_max_hp() {
        let mut actor = Archetype::Rust.instantiate(true);
        let mut target = Archetype::Python.instantiate(false);
        actor.current_hp = 90;
        let ability = Archetype::Rust.ability().unwrap();

        let line = (ability.effect)(&mut actor, &mut target);

        assert_eq!(actor.current_hp, BASE_HP);
        assert_eq!(line, "Rust heals 30 HP!");
    }

    #[test]
    fn archetype_parses_from_config_strings() {
        assert_eq!("c++".parse::<Archetype>().unwrap(), Archetype::Cpp);
        assert_eq!("CPP".parse::<Archetype>().unwrap(), Archetype::Cpp);
        assert_eq!("Rust".parse::<Archetype>().unwrap(), Archetype::Rust);
        assert!("cobol".parse::<Archetype>().is_err());
    }
}
