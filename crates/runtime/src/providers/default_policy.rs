//! Health-aware fallback policy for the non-human side.

use duel_core::{ActionType, ChaChaSource, Character, RandomSource};

use crate::api::{ActionProvider, Result};

/// Below this HP the policy stops gambling on specials and mixes in Defend.
pub const DEFENSIVE_HP_THRESHOLD: i32 = 50;

/// Default enemy policy: a coin flip over a health-dependent pair.
///
/// At 50 HP or more it picks uniformly between Attack and Special;
/// below that, between Attack and Defend. One acceptable policy among
/// many — the runner accepts any [`ActionProvider`].
pub struct DefaultPolicy {
    rng: Box<dyn RandomSource>,
}

impl DefaultPolicy {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Convenience constructor backed by a seeded ChaCha source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(ChaChaSource::seeded(seed)))
    }
}

impl ActionProvider for DefaultPolicy {
    fn provide_action(&mut self, actor: &Character) -> Result<ActionType> {
        let options = if actor.current_hp >= DEFENSIVE_HP_THRESHOLD {
            [ActionType::Attack, ActionType::Special]
        } else {
            [ActionType::Attack, ActionType::Defend]
        };
        Ok(options[self.rng.range_i32(0, 1) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::ScriptedSource;

    fn policy(draws: impl IntoIterator<Item = u32>) -> DefaultPolicy {
        DefaultPolicy::new(Box::new(ScriptedSource::new(draws)))
    }

    #[test]
    fn healthy_character_picks_between_attack_and_special() {
        let mut policy = policy([0, 1]);
        let actor = Character::new("Test", 10, 5, 100, false);

        assert_eq!(policy.provide_action(&actor).unwrap(), ActionType::Attack);
        assert_eq!(policy.provide_action(&actor).unwrap(), ActionType::Special);
    }

    #[test]
    fn wounded_character_picks_between_attack_and_defend() {
        let mut policy = policy([0, 1]);
        let mut actor = Character::new("Test", 10, 5, 100, false);
        actor.current_hp = 49;

        assert_eq!(policy.provide_action(&actor).unwrap(), ActionType::Attack);
        assert_eq!(policy.provide_action(&actor).unwrap(), ActionType::Defend);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut policy = policy([1]);
        let mut actor = Character::new("Test", 10, 5, 100, false);
        actor.current_hp = DEFENSIVE_HP_THRESHOLD;

        // Exactly at the threshold the aggressive pair is still in play.
        assert_eq!(policy.provide_action(&actor).unwrap(), ActionType::Special);
    }
}
