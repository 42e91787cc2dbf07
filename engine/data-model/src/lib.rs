//! Entities and contracts shared by every FPL decision-core crate.

pub mod adapters;
pub mod calibration;
pub mod chip;
pub mod club;
pub mod decision;
pub mod error;
pub mod filters;
pub mod fixture;
pub mod gameweek;
pub mod ids;
pub mod intelligence;
pub mod performance;
pub mod player;
pub mod prediction;
pub mod repository;
pub mod squad;
pub mod transfer;

pub use adapters::{Bootstrap, LeagueDataSource, LivePlayerState};
pub use adapters::IntelligenceSource;
pub use calibration::{CalibrationTable, Correction, PriceBracket};
pub use chip::{Chip, ChipUsage};
pub use club::{Club, ClubStrength, VenueStrength};
pub use decision::Decision;
pub use error::{DataModelError, Result};
pub use filters::PlayerFilter;
pub use fixture::Fixture;
pub use gameweek::{half_of, Gameweek, SeasonHalf, FIRST_HALF_LAST_GW};
pub use ids::{ClubId, FixtureId, GameweekId, PlayerId};
pub use intelligence::{
    IntelligenceSignal, RawSignal, RawSignalType, Severity, SignalStatus,
};
pub use performance::{DefensiveActions, PlayerGameweekPerformance, Venue};
pub use player::{AvailabilityStatus, IctIndices, Player, Position};
pub use prediction::{AdjustedPrediction, AdjustmentFactor, Prediction};
pub use repository::{Repository, WorkflowGuard};
pub use squad::{DraftSquad, Pick, Slot, Squad};
pub use transfer::{Transfer, TransferReasoning};
