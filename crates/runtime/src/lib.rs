//! Match orchestration for duel battles.
//!
//! This crate wires the action provider abstraction and the bundled
//! policies into a cohesive match loop. Consumers embed [`MatchRunner`] to
//! drive turns until the battle reports a terminal state; presentation
//! stays entirely outside, reading the battle through accessors between
//! steps.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the types downstream clients interact with
//! - [`providers`] ships concrete action policies
//! - [`runner`] hosts the match loop and its builder
pub mod api;
pub mod providers;
pub mod runner;

pub use api::{ActionProvider, ProviderKind, Result, RuntimeError};
pub use providers::{AggressivePolicy, DefaultPolicy, ScriptedPolicy};
pub use runner::{MatchRunner, MatchRunnerBuilder};
