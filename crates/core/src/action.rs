//! The per-turn action vocabulary.

/// One participant's choice for a single turn.
///
/// `Skip` is never requested by a human collaborator; it is imposed by the
/// resolver's pre-action overrides (confusion, forced skip) or chosen by an
/// action policy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionType {
    /// Deal damage to the opposing character.
    Attack,
    /// Brace for the next hit, halving its damage.
    Defend,
    /// Fire the character's archetype ability (subject to cooldown).
    Special,
    /// Do nothing this turn.
    Skip,
}

impl ActionType {
    /// Total number of action types.
    pub const COUNT: usize = 4;

    /// Returns all action types in declaration order.
    ///
    /// The confusion override indexes into this array, so the order is part
    /// of the replay contract.
    pub const fn all() -> [ActionType; Self::COUNT] {
        [
            ActionType::Attack,
            ActionType::Defend,
            ActionType::Special,
            ActionType::Skip,
        ]
    }
}
