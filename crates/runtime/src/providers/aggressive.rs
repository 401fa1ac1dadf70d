use duel_core::{ActionType, Character};

use crate::api::{ActionProvider, Result};

/// Policy that attacks every turn, whatever the situation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AggressivePolicy;

impl ActionProvider for AggressivePolicy {
    fn provide_action(&mut self, _actor: &Character) -> Result<ActionType> {
        Ok(ActionType::Attack)
    }
}
