//! Entity classes and property keys the reducer depends on.
//!
//! These names come from the replay's entity schema. If the upstream game
//! renames any of them, reduction fails loudly with a missing-property error
//! rather than producing a silently truncated series.

/// Number of tracked player slots: two teams of five.
pub const ROSTER_SIZE: usize = 10;

/// Entity class carrying match rules and timing.
pub const GAME_RULES_CLASS: &str = "CDOTAGamerulesProxy";

/// Entity class carrying per-player aggregate data (net worth).
pub const DATA_SPECTATOR_CLASS: &str = "CDOTA_DataSpectator";

/// Match start time, present once the horn has sounded.
pub const GAME_START_TIME: &str = "CDOTAGamerules.m_flGameStartTime";

/// Winning team code, present only on the terminating rules update.
pub const GAME_WINNER: &str = "CDOTAGamerules.m_nGameWinner";

/// Match end time, expected alongside [`GAME_WINNER`].
pub const GAME_END_TIME: &str = "CDOTAGamerules.m_flGameEndTime";

/// Current game clock, expected on every in-progress rules update.
pub const GAME_TIME: &str = "CDOTAGamerules.m_fGameTime";

/// Prefix of the per-slot net worth keys on [`DATA_SPECTATOR_CLASS`].
const NET_WORTH_PREFIX: &str = "m_iNetWorth";

/// Build the net worth key for a roster slot, e.g. `m_iNetWorth.0007`.
pub fn net_worth_key(slot: usize) -> String {
    format!("{NET_WORTH_PREFIX}.{slot:04}")
}

/// The entity classes the reducer routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// [`GAME_RULES_CLASS`]: drives the match lifecycle.
    GameRules,
    /// [`DATA_SPECTATOR_CLASS`]: source of net worth samples.
    DataSpectator,
}

impl ClassKind {
    /// Classify an entity class name. Unknown classes yield `None`.
    pub fn from_class_name(name: &str) -> Option<Self> {
        match name {
            GAME_RULES_CLASS => Some(Self::GameRules),
            DATA_SPECTATOR_CLASS => Some(Self::DataSpectator),
            _ => None,
        }
    }

    /// The class name this kind matches.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::GameRules => GAME_RULES_CLASS,
            Self::DataSpectator => DATA_SPECTATOR_CLASS,
        }
    }
}
