//! The match loop and its builder.

use duel_core::{Battle, Role};

use crate::api::{ActionProvider, ProviderKind, Result, RuntimeError};

/// Drives a battle to its terminal state.
///
/// Each step asks the provider for the active role to pick an action and
/// feeds it to the resolver. The runner never calls the resolver after the
/// battle reports a terminal state.
pub struct MatchRunner {
    battle: Battle,
    player_provider: Box<dyn ActionProvider>,
    enemy_provider: Box<dyn ActionProvider>,
}

impl MatchRunner {
    /// Create a new match runner builder.
    pub fn builder() -> MatchRunnerBuilder {
        MatchRunnerBuilder::default()
    }

    /// Resolves a single turn.
    ///
    /// Returns `Ok(false)` without touching the resolver once the battle
    /// is over. A battle with a missing participant is an error here: the
    /// resolver would silently no-op and the loop would never terminate.
    pub fn step(&mut self) -> Result<bool> {
        if self.battle.is_over() {
            return Ok(false);
        }

        let role = self.battle.active_role();
        let action = {
            let actor = self
                .battle
                .active_character()
                .ok_or(RuntimeError::MissingParticipant { role })?;
            let provider = match role {
                Role::Player => self.player_provider.as_mut(),
                Role::Enemy => self.enemy_provider.as_mut(),
            };
            provider.provide_action(actor)?
        };

        tracing::debug!(%role, ?action, turn = self.battle.turn(), "resolving turn");
        self.battle.resolve_turn(action);

        Ok(true)
    }

    /// Runs the match loop until the battle reports a terminal state.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        tracing::info!(turns = self.battle.turn(), "match finished");
        Ok(())
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    pub fn battle_mut(&mut self) -> &mut Battle {
        &mut self.battle
    }
}

/// Builder for [`MatchRunner`].
///
/// `build` fails if the battle or either provider is missing, naming the
/// absent piece.
#[derive(Default)]
pub struct MatchRunnerBuilder {
    battle: Option<Battle>,
    player_provider: Option<Box<dyn ActionProvider>>,
    enemy_provider: Option<Box<dyn ActionProvider>>,
}

impl MatchRunnerBuilder {
    pub fn battle(mut self, battle: Battle) -> Self {
        self.battle = Some(battle);
        self
    }

    pub fn player_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.player_provider = Some(Box::new(provider));
        self
    }

    pub fn enemy_provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.enemy_provider = Some(Box::new(provider));
        self
    }

    pub fn build(self) -> Result<MatchRunner> {
        let battle = self.battle.ok_or(RuntimeError::MissingBattle)?;
        let player_provider = self.player_provider.ok_or(RuntimeError::ProviderNotSet {
            kind: ProviderKind::Player,
        })?;
        let enemy_provider = self.enemy_provider.ok_or(RuntimeError::ProviderNotSet {
            kind: ProviderKind::Enemy,
        })?;

        Ok(MatchRunner {
            battle,
            player_provider,
            enemy_provider,
        })
    }
}
