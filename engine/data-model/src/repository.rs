//! The Repository contract: one `#[async_trait]` trait, `Send + Sync`,
//! implementations own their own locking.

use crate::calibration::{CalibrationTable, Correction, PriceBracket};
use crate::chip::ChipUsage;
use crate::club::Club;
use crate::error::Result;
use crate::filters::PlayerFilter;
use crate::fixture::Fixture;
use crate::gameweek::Gameweek;
use crate::ids::{ClubId, GameweekId, PlayerId};
use crate::intelligence::IntelligenceSignal;
use crate::performance::PlayerGameweekPerformance;
use crate::player::{Player, Position};
use crate::prediction::Prediction;
use crate::squad::{DraftSquad, Squad};
use crate::transfer::Transfer;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A held cooperative lock preventing two post-gameweek workflows for the
/// same gameweek from running concurrently. Dropping it releases the lock;
/// implementations should release in `Drop` as a safety net, but the
/// orchestrator always calls `release` explicitly on the happy path.
pub struct WorkflowGuard {
    pub gameweek: GameweekId,
}

#[async_trait]
pub trait Repository: Send + Sync {
    // Players
    async fn upsert_player(&self, player: Player) -> Result<()>;
    async fn find_players(&self, filter: &PlayerFilter) -> Result<Vec<Player>>;
    async fn get_player(&self, id: PlayerId) -> Result<Player>;
    async fn player_history(
        &self,
        player: PlayerId,
        last_k: usize,
    ) -> Result<Vec<PlayerGameweekPerformance>>;
    /// Inserts or replaces the (player, gameweek) row, keeping history
    /// append-mostly: a re-ingest of an already-resolved gameweek overwrites
    /// rather than duplicates.
    async fn upsert_performance(&self, performance: PlayerGameweekPerformance) -> Result<()>;

    // Clubs / fixtures / gameweeks
    async fn upsert_club(&self, club: Club) -> Result<()>;
    async fn upsert_fixture(&self, fixture: Fixture) -> Result<()>;
    async fn upcoming_fixtures(
        &self,
        club: ClubId,
        from_gw: u8,
        to_gw: u8,
    ) -> Result<Vec<Fixture>>;
    async fn upsert_gameweek(&self, gameweek: Gameweek) -> Result<()>;
    async fn current_gameweek(&self) -> Result<Gameweek>;
    async fn set_gameweek_status(
        &self,
        id: GameweekId,
        is_current: bool,
        is_next: bool,
        finished: bool,
    ) -> Result<()>;

    // Squad / draft lifecycle
    async fn current_squad(&self) -> Result<Squad>;
    async fn create_draft(&self, gameweek: GameweekId) -> Result<DraftSquad>;
    async fn save_draft(&self, draft: DraftSquad) -> Result<()>;
    async fn get_draft(&self, gameweek: GameweekId) -> Result<DraftSquad>;
    /// Atomically replaces `current_squad` with the draft's contents and
    /// archives the prior current squad under its resolved gameweek.
    async fn promote_draft(&self, gameweek: GameweekId) -> Result<()>;
    async fn record_transfers(&self, transfers: Vec<Transfer>) -> Result<()>;
    async fn backfill_transfer_gain(
        &self,
        gameweek: GameweekId,
        player_out: PlayerId,
        player_in: PlayerId,
        actual_gain: f64,
    ) -> Result<()>;
    async fn chips_used(&self) -> Result<Vec<ChipUsage>>;
    async fn record_chip_usage(&self, usage: ChipUsage) -> Result<()>;

    // Predictions
    async fn upsert_prediction(&self, prediction: Prediction) -> Result<()>;
    async fn backfill_actual(
        &self,
        player: PlayerId,
        gameweek: GameweekId,
        model_version: &str,
        actual_points: i32,
    ) -> Result<()>;
    async fn predictions_for_gameweek(&self, gameweek: GameweekId) -> Result<Vec<Prediction>>;

    // Intelligence
    async fn append_signal(&self, signal: IntelligenceSignal) -> Result<()>;
    async fn signals_since(
        &self,
        cutoff: DateTime<Utc>,
        player: Option<PlayerId>,
    ) -> Result<Vec<IntelligenceSignal>>;
    async fn purge_expired_intelligence(
        &self,
        transcript_ttl_days: i64,
        structured_ttl_days: i64,
    ) -> Result<u64>;

    // Calibration
    async fn read_calibration(&self, gameweek: GameweekId) -> Result<CalibrationTable>;
    async fn write_calibration(
        &self,
        gameweek: GameweekId,
        position_corrections: Vec<(Position, Correction)>,
        bracket_corrections: Vec<(PriceBracket, Correction)>,
    ) -> Result<()>;

    // Workflow coordination
    async fn try_acquire_workflow_lock(&self, gameweek: GameweekId) -> Result<WorkflowGuard>;
    async fn release_workflow_lock(&self, guard: WorkflowGuard) -> Result<()>;
}
