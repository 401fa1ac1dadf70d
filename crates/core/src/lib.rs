//! Deterministic duel combat logic shared across clients.
//!
//! `duel-core` defines the canonical rules (actions, characters, the turn
//! resolver) and exposes pure APIs that can be reused by both the runtime
//! and offline tools. All state mutation flows through [`battle::Battle`],
//! and supporting crates depend on the types re-exported here.
//!
//! The crate performs no I/O and carries no logging: the append-only battle
//! log owned by [`battle::Battle`] is its only output channel. Randomness is
//! injected through the [`rng::RandomSource`] capability so matches can be
//! replayed from a seed or scripted in tests.
pub mod action;
pub mod archetype;
pub mod battle;
pub mod character;
pub mod rng;

pub use action::ActionType;
pub use archetype::{Ability, Archetype};
pub use battle::{Battle, Role};
pub use character::{Character, CharacterSnapshot};
pub use rng::{ChaChaSource, RandomSource, ScriptedSource};
