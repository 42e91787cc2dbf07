use data_model::{Chip, ClubId, PlayerId, Position, SeasonHalf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RulesError>;

/// Each variant names exactly one violated invariant; no free-form strings
/// in the payload.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum RulesError {
    #[error("squad has {actual} players, must have 15")]
    WrongSquadSize { actual: usize },

    #[error("{position:?} count {actual} outside [{min}, {max}]")]
    PositionCountOutOfRange { position: Position, actual: usize, min: usize, max: usize },

    #[error("starting XI has {actual} players, must have exactly 11")]
    StartingXiWrongSize { actual: usize },

    #[error("starting XI must have exactly 1 goalkeeper, has {actual}")]
    StartingXiGoalkeeperCount { actual: usize },

    #[error("starting XI must have at least 3 defenders, has {actual}")]
    StartingXiTooFewDefenders { actual: usize },

    #[error("starting XI must have at least 1 forward, has {actual}")]
    StartingXiTooFewForwards { actual: usize },

    #[error("club {club:?} has {count} players, exceeds cap of {cap}")]
    ClubCapExceeded { club: ClubId, count: usize, cap: usize },

    #[error("squad cost {total_cost} exceeds budget {budget}")]
    BudgetExceeded { total_cost: i32, budget: i32 },

    #[error("squad must have exactly one captain, has {actual}")]
    CaptainCount { actual: usize },

    #[error("squad must have exactly one vice-captain, has {actual}")]
    ViceCount { actual: usize },

    #[error("captain and vice-captain must be distinct players")]
    CaptainViceSame,

    #[error("captain must be in the starting XI")]
    CaptainNotStarting,

    #[error("vice-captain must be in the starting XI")]
    ViceNotStarting,

    #[error("player {player:?} is not in the current squad")]
    PlayerOutNotInSquad { player: PlayerId },

    #[error("player {player:?} is already in the squad")]
    PlayerInAlreadyInSquad { player: PlayerId },

    #[error("transfer needs {needed} but only {available} is available")]
    InsufficientBudget { needed: i32, available: i32 },

    #[error("{chip:?} already used in the {half:?} half")]
    ChipAlreadyUsedThisHalf { chip: Chip, half: SeasonHalf },

    #[error("wildcard and free hit cannot both be active in gameweek {gameweek}")]
    WildcardFreeHitConflict { gameweek: u8 },
}
