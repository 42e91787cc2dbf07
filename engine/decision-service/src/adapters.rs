//! Disk-backed `LeagueDataSource`/`IntelligenceSource` implementations.
//!
//! The core deliberately ships no live HTTP fetcher: decisions are computed
//! from whatever the adapter layer hands it, and the league API client and
//! transcript/RSS scrapers are thin external processes. What it does ship
//! is a JSON-snapshot adapter, playing the same role a registry's
//! load-from-file constructor plays for pre-fetched data: a way to run the
//! orchestrator against a cached pull without wiring a real network client.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use data_model::{
    Bootstrap, Club, DataModelError, Fixture, Gameweek, IntelligenceSource, LeagueDataSource,
    Player, PlayerGameweekPerformance, PlayerId, RawSignal,
};

type Result<T> = std::result::Result<T, DataModelError>;

#[derive(Serialize, Deserialize)]
struct BootstrapSnapshot {
    players: Vec<Player>,
    clubs: Vec<Club>,
    gameweeks: Vec<Gameweek>,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|e| DataModelError::UpstreamUnavailable {
        context: format!("reading {}: {e}", path.display()),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| DataModelError::UpstreamUnavailable {
        context: format!("parsing {}: {e}", path.display()),
    })
}

fn read_json_or_default<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Result<T> {
    if path.exists() {
        read_json(path)
    } else {
        Ok(T::default())
    }
}

/// Reads `bootstrap.json`, `fixtures.json` and `history/<player_id>.json`
/// from a data directory. Missing history files are treated as an empty
/// history rather than an error, since a newly-signed player has none yet.
pub struct JsonLeagueDataSource {
    data_dir: PathBuf,
}

impl JsonLeagueDataSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonLeagueDataSource { data_dir: data_dir.into() }
    }

    fn history_path(&self, player: PlayerId) -> PathBuf {
        self.data_dir.join("history").join(format!("{}.json", player.0))
    }
}

#[async_trait]
impl LeagueDataSource for JsonLeagueDataSource {
    async fn bootstrap(&self) -> Result<Bootstrap> {
        let snapshot: BootstrapSnapshot = read_json(&self.data_dir.join("bootstrap.json"))?;
        Ok(Bootstrap {
            players: snapshot.players,
            clubs: snapshot.clubs,
            gameweeks: snapshot.gameweeks,
        })
    }

    async fn player_history(&self, player: PlayerId) -> Result<Vec<PlayerGameweekPerformance>> {
        read_json_or_default(&self.history_path(player))
    }

    async fn fixtures(&self) -> Result<Vec<Fixture>> {
        read_json_or_default(&self.data_dir.join("fixtures.json"))
    }

    async fn live_gameweek(&self, _gameweek: u8) -> Result<Vec<data_model::LivePlayerState>> {
        Ok(Vec::new())
    }
}

/// Reads every `*.json` file under `signals/` as a `Vec<RawSignal>` and
/// concatenates them. Each poll re-reads the directory, so newly dropped
/// files are picked up on the next sweep without a restart.
pub struct JsonIntelligenceSource {
    id: String,
    signals_dir: PathBuf,
}

impl JsonIntelligenceSource {
    pub fn new(id: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        JsonIntelligenceSource { id: id.into(), signals_dir: data_dir.into().join("signals") }
    }
}

#[async_trait]
impl IntelligenceSource for JsonIntelligenceSource {
    fn source_id(&self) -> &str {
        &self.id
    }

    async fn poll(&self, since: DateTime<Utc>) -> Result<Vec<RawSignal>> {
        if !self.signals_dir.exists() {
            return Ok(Vec::new());
        }
        let mut items = Vec::new();
        let entries = std::fs::read_dir(&self.signals_dir).map_err(|e| {
            DataModelError::UpstreamUnavailable {
                context: format!("reading {}: {e}", self.signals_dir.display()),
            }
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| DataModelError::UpstreamUnavailable {
                context: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let batch: Vec<RawSignal> = read_json(&path)?;
            items.extend(batch.into_iter().filter(|s| s.observed_at > since));
        }
        Ok(items)
    }
}

/// Loads per-position model weights from `models.json` if present, falling
/// back to a zeroed model per position (predicts 0 expected points with low
/// confidence until real weights are trained and dropped in place).
pub fn load_predictor(data_dir: &Path, feature_count: usize) -> predictor::baseline::BaselinePredictor {
    use data_model::Position;
    use predictor::model::PositionModel;

    let models_path = data_dir.join("models.json");
    let mut models: HashMap<Position, PositionModel> = if models_path.exists() {
        read_json(&models_path).unwrap_or_default()
    } else {
        HashMap::new()
    };
    for position in [Position::Gk, Position::Def, Position::Mid, Position::Fwd] {
        models.entry(position).or_insert_with(|| PositionModel::zeroed(feature_count));
    }
    predictor::baseline::BaselinePredictor::new("baseline-v1", models)
}
