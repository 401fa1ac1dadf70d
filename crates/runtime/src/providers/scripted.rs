use std::collections::VecDeque;

use duel_core::{ActionType, Character};

use crate::api::{ActionProvider, Result};

/// Test double that replays a fixed action sequence.
///
/// Once the script runs dry it keeps producing `Skip`, so an
/// under-provisioned test fails on an assertion rather than a panic.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPolicy {
    actions: VecDeque<ActionType>,
}

impl ScriptedPolicy {
    pub fn new(actions: impl IntoIterator<Item = ActionType>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl ActionProvider for ScriptedPolicy {
    fn provide_action(&mut self, _actor: &Character) -> Result<ActionType> {
        Ok(self.actions.pop_front().unwrap_or(ActionType::Skip))
    }
}
