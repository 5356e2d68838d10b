use thiserror::Error;

/// Reasons a round is refused before any damage is rolled. The display text is what the
/// players see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("Battles cannot be retold without names. Please type a name.")]
    NameTooShort,

    #[error("Legends cannot remember names that long. Please shorten your name.")]
    NameTooLong,

    #[error("You need a weapon to survive in this world. Please choose one.")]
    WeaponNotChosen,
}

impl BattleError {
    /// Stable machine-readable code for API payloads.
    pub const fn code(self) -> &'static str {
        match self {
            Self::NameTooShort => "name_too_short",
            Self::NameTooLong => "name_too_long",
            Self::WeaponNotChosen => "weapon_not_chosen",
        }
    }
}
