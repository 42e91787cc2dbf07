//! An in-memory `Repository`. Every collection is guarded by its own
//! `tokio::sync::RwLock`; callers needing a consistent view across more
//! than one collection (draft promotion) take the locks in a fixed order
//! to avoid deadlock: squad, then drafts, then archive.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use data_model::{
    CalibrationTable, ChipUsage, Club, ClubId, Correction, DataModelError, DraftSquad, Fixture,
    Gameweek, GameweekId, IntelligenceSignal, Player, PlayerFilter, PlayerGameweekPerformance,
    PlayerId, Position, Prediction, PriceBracket, Repository, Result, Squad, Transfer,
    WorkflowGuard,
};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

#[derive(Default)]
struct State {
    players: HashMap<PlayerId, Player>,
    clubs: HashMap<ClubId, Club>,
    fixtures: HashMap<data_model::FixtureId, Fixture>,
    gameweeks: HashMap<GameweekId, Gameweek>,
    history: HashMap<PlayerId, Vec<PlayerGameweekPerformance>>,
    current_squad: Option<Squad>,
    archived_squads: HashMap<GameweekId, Squad>,
    drafts: HashMap<GameweekId, DraftSquad>,
    transfers: Vec<Transfer>,
    chips_used: Vec<ChipUsage>,
    predictions: HashMap<(PlayerId, GameweekId, String), Prediction>,
    signals: Vec<IntelligenceSignal>,
    calibration: HashMap<GameweekId, CalibrationTable>,
}

/// Reference `Repository` implementation backed by process memory. Suitable
/// for tests and single-process deployments; a durable backend would swap
/// this crate for one writing through to a real store while keeping the
/// same trait.
pub struct InMemoryRepository {
    state: RwLock<State>,
    running_workflows: RwLock<HashSet<GameweekId>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    pub fn new() -> Self {
        InMemoryRepository { state: RwLock::new(State::default()), running_workflows: RwLock::new(HashSet::new()) }
    }
}

fn not_found(kind: &'static str, id: impl std::fmt::Display) -> DataModelError {
    DataModelError::NotFound { kind, id: id.to_string() }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn upsert_player(&self, player: Player) -> Result<()> {
        self.state.write().await.players.insert(player.season_id, player);
        Ok(())
    }

    async fn find_players(&self, filter: &PlayerFilter) -> Result<Vec<Player>> {
        let state = self.state.read().await;
        let matches = state
            .players
            .values()
            .filter(|p| filter.position.map_or(true, |pos| p.position == pos))
            .filter(|p| filter.max_price.map_or(true, |max| p.now_cost <= max))
            .filter(|p| filter.min_price.map_or(true, |min| p.now_cost >= min))
            .filter(|p| filter.status.map_or(true, |s| p.status == s))
            .filter(|p| filter.club.map_or(true, |c| p.club == c))
            .cloned()
            .collect();
        Ok(matches)
    }

    async fn get_player(&self, id: PlayerId) -> Result<Player> {
        self.state
            .read()
            .await
            .players
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("player", id))
    }

    async fn player_history(&self, player: PlayerId, last_k: usize) -> Result<Vec<PlayerGameweekPerformance>> {
        let state = self.state.read().await;
        let mut history = state.history.get(&player).cloned().unwrap_or_default();
        history.sort_by_key(|p| p.gameweek.0);
        let start = history.len().saturating_sub(last_k);
        Ok(history[start..].to_vec())
    }

    async fn upsert_performance(&self, performance: PlayerGameweekPerformance) -> Result<()> {
        let mut state = self.state.write().await;
        let rows = state.history.entry(performance.player).or_default();
        rows.retain(|p| p.gameweek != performance.gameweek);
        rows.push(performance);
        Ok(())
    }

    async fn upsert_club(&self, club: Club) -> Result<()> {
        self.state.write().await.clubs.insert(club.id, club);
        Ok(())
    }

    async fn upsert_fixture(&self, fixture: Fixture) -> Result<()> {
        self.state.write().await.fixtures.insert(fixture.id, fixture);
        Ok(())
    }

    async fn upcoming_fixtures(&self, club: ClubId, from_gw: u8, to_gw: u8) -> Result<Vec<Fixture>> {
        let state = self.state.read().await;
        let mut matches: Vec<Fixture> = state
            .fixtures
            .values()
            .filter(|f| (f.home_club == club || f.away_club == club) && !f.finished)
            .filter(|f| {
                let gw = f.gameweek.0;
                gw >= from_gw as u32 && gw <= to_gw as u32
            })
            .cloned()
            .collect();
        matches.sort_by_key(|f| f.gameweek.0);
        Ok(matches)
    }

    async fn upsert_gameweek(&self, gameweek: Gameweek) -> Result<()> {
        self.state.write().await.gameweeks.insert(gameweek.id, gameweek);
        Ok(())
    }

    async fn current_gameweek(&self) -> Result<Gameweek> {
        self.state
            .read()
            .await
            .gameweeks
            .values()
            .find(|g| g.is_current)
            .cloned()
            .ok_or_else(|| not_found("gameweek", "current"))
    }

    async fn set_gameweek_status(&self, id: GameweekId, is_current: bool, is_next: bool, finished: bool) -> Result<()> {
        let mut state = self.state.write().await;
        let gameweek = state.gameweeks.get_mut(&id).ok_or_else(|| not_found("gameweek", id))?;
        gameweek.is_current = is_current;
        gameweek.is_next = is_next;
        gameweek.finished = finished;
        Ok(())
    }

    async fn current_squad(&self) -> Result<Squad> {
        self.state
            .read()
            .await
            .current_squad
            .clone()
            .ok_or_else(|| not_found("squad", "current"))
    }

    async fn create_draft(&self, gameweek: GameweekId) -> Result<DraftSquad> {
        let state = self.state.read().await;
        let base = state.current_squad.clone().ok_or_else(|| not_found("squad", "current"))?;
        Ok(DraftSquad { gameweek, squad: base })
    }

    async fn save_draft(&self, draft: DraftSquad) -> Result<()> {
        self.state.write().await.drafts.insert(draft.gameweek, draft);
        Ok(())
    }

    async fn get_draft(&self, gameweek: GameweekId) -> Result<DraftSquad> {
        self.state
            .read()
            .await
            .drafts
            .get(&gameweek)
            .cloned()
            .ok_or_else(|| not_found("draft", gameweek))
    }

    async fn promote_draft(&self, gameweek: GameweekId) -> Result<()> {
        let mut state = self.state.write().await;
        let draft = state.drafts.get(&gameweek).cloned().ok_or_else(|| not_found("draft", gameweek))?;
        if let Some(previous) = state.current_squad.take() {
            state.archived_squads.insert(gameweek, previous);
        }
        state.current_squad = Some(draft.squad);
        Ok(())
    }

    async fn record_transfers(&self, transfers: Vec<Transfer>) -> Result<()> {
        self.state.write().await.transfers.extend(transfers);
        Ok(())
    }

    async fn backfill_transfer_gain(
        &self,
        gameweek: GameweekId,
        player_out: PlayerId,
        player_in: PlayerId,
        actual_gain: f64,
    ) -> Result<()> {
        let mut state = self.state.write().await;
        let transfer = state
            .transfers
            .iter_mut()
            .find(|t| t.gameweek == gameweek && t.player_out == player_out && t.player_in == player_in)
            .ok_or_else(|| not_found("transfer", format!("{player_out}->{player_in}@{gameweek}")))?;
        transfer.actual_gain = Some(actual_gain);
        Ok(())
    }

    async fn chips_used(&self) -> Result<Vec<ChipUsage>> {
        Ok(self.state.read().await.chips_used.clone())
    }

    async fn record_chip_usage(&self, usage: ChipUsage) -> Result<()> {
        self.state.write().await.chips_used.push(usage);
        Ok(())
    }

    async fn upsert_prediction(&self, prediction: Prediction) -> Result<()> {
        let key = (prediction.player, prediction.gameweek, prediction.model_version.clone());
        self.state.write().await.predictions.insert(key, prediction);
        Ok(())
    }

    async fn backfill_actual(
        &self,
        player: PlayerId,
        gameweek: GameweekId,
        model_version: &str,
        actual_points: i32,
    ) -> Result<()> {
        let mut state = self.state.write().await;
        let key = (player, gameweek, model_version.to_string());
        let prediction = state.predictions.get_mut(&key).ok_or_else(|| {
            not_found("prediction", format!("{player}@{gameweek}/{model_version}"))
        })?;
        prediction.resolve(actual_points);
        Ok(())
    }

    async fn predictions_for_gameweek(&self, gameweek: GameweekId) -> Result<Vec<Prediction>> {
        let state = self.state.read().await;
        Ok(state.predictions.values().filter(|p| p.gameweek == gameweek).cloned().collect())
    }

    async fn append_signal(&self, signal: IntelligenceSignal) -> Result<()> {
        self.state.write().await.signals.push(signal);
        Ok(())
    }

    async fn signals_since(&self, cutoff: DateTime<Utc>, player: Option<PlayerId>) -> Result<Vec<IntelligenceSignal>> {
        let state = self.state.read().await;
        Ok(state
            .signals
            .iter()
            .filter(|s| s.timestamp > cutoff)
            .filter(|s| player.map_or(true, |p| s.matched_player == Some(p)))
            .cloned()
            .collect())
    }

    /// Structured signals (a matched player, an actionable classification)
    /// are kept longer than raw transcript-derived noise; callers pass the
    /// two TTLs separately since retention policy treats them differently.
    async fn purge_expired_intelligence(&self, transcript_ttl_days: i64, structured_ttl_days: i64) -> Result<u64> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let before = state.signals.len();
        state.signals.retain(|s| {
            let age_days = (now - s.timestamp).num_days();
            let ttl = if s.matched_player.is_some() { structured_ttl_days } else { transcript_ttl_days };
            age_days < ttl
        });
        Ok((before - state.signals.len()) as u64)
    }

    async fn read_calibration(&self, gameweek: GameweekId) -> Result<CalibrationTable> {
        let state = self.state.read().await;
        state
            .calibration
            .values()
            .find(|c| gameweek.0 >= c.valid_from_gameweek.0 && gameweek.0 <= c.valid_to_gameweek.0)
            .cloned()
            .ok_or_else(|| not_found("calibration", gameweek))
    }

    async fn write_calibration(
        &self,
        gameweek: GameweekId,
        position_corrections: Vec<(Position, Correction)>,
        bracket_corrections: Vec<(PriceBracket, Correction)>,
    ) -> Result<()> {
        let table = CalibrationTable {
            valid_from_gameweek: gameweek,
            valid_to_gameweek: gameweek,
            by_position: position_corrections,
            by_bracket: bracket_corrections,
        };
        self.state.write().await.calibration.insert(gameweek, table);
        Ok(())
    }

    async fn try_acquire_workflow_lock(&self, gameweek: GameweekId) -> Result<WorkflowGuard> {
        let mut running = self.running_workflows.write().await;
        if running.contains(&gameweek) {
            return Err(DataModelError::WorkflowAlreadyRunning { gameweek: gameweek.0 as u8 });
        }
        running.insert(gameweek);
        Ok(WorkflowGuard { gameweek })
    }

    async fn release_workflow_lock(&self, guard: WorkflowGuard) -> Result<()> {
        self.running_workflows.write().await.remove(&guard.gameweek);
        Ok(())
    }
}
