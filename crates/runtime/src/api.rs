//! Types downstream clients interact with: the action provider capability
//! and the unified runtime error surface.

use std::fmt;

use thiserror::Error;

use duel_core::{ActionType, Character, Role};

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Produces one action per turn for one side of the battle.
///
/// Implementations only get read access to the acting character's public
/// state; any randomness they need is owned by the provider and injected
/// at construction, keeping decisions deterministic under a fixed seed.
/// Human-facing implementations may fail (closed input stream); pure
/// policies are infallible in practice.
pub trait ActionProvider {
    fn provide_action(&mut self, actor: &Character) -> Result<ActionType>;
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{kind} action provider not set")]
    ProviderNotSet { kind: ProviderKind },

    #[error("match runner requires a battle to be configured before building")]
    MissingBattle,

    #[error("{role} character is not set")]
    MissingParticipant { role: Role },

    #[error("input stream closed before an action was selected")]
    InputClosed,

    #[error("failed to read player input")]
    Io(#[from] std::io::Error),
}

/// Which side of the match a provider drives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    Player,
    Enemy,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProviderKind::Player => "player",
            ProviderKind::Enemy => "enemy",
        };
        write!(f, "{}", label)
    }
}
