//! Service state management and component wiring.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use data_model::GameweekId;
use repository::InMemoryRepository;

use crate::adapters::{load_predictor, JsonIntelligenceSource, JsonLeagueDataSource};
use crate::config::ServiceConfig;
use crate::workflow::{learn_from_resolved_gameweek, run_weekly_cycle, Collaborators};

/// Everything the running process holds: configuration, the collaborators
/// the weekly cycle talks to, and a running flag flipped by the signal
/// handler's shutdown path.
pub struct ServiceState {
    pub config: ServiceConfig,
    pub collaborators: Collaborators,
    is_running: Arc<RwLock<bool>>,
}

impl ServiceState {
    /// Builds the repository, adapters and predictor from `config`. The
    /// repository starts empty; the first cycle's refresh step populates it.
    pub async fn new(config: ServiceConfig) -> Result<Self> {
        info!("initializing decision core components");

        let data_dir = &config.service.data_dir;
        if !data_dir.exists() {
            std::fs::create_dir_all(data_dir).context("failed to create data directory")?;
        }

        let feature_count = predictor::baseline::expected_feature_count();
        let predictor = Arc::new(load_predictor(data_dir, feature_count));
        let league = Arc::new(JsonLeagueDataSource::new(data_dir));
        let intelligence: Vec<Arc<dyn data_model::IntelligenceSource>> =
            vec![Arc::new(JsonIntelligenceSource::new("local-snapshot", data_dir))];
        let repository = Arc::new(InMemoryRepository::new());

        let collaborators = Collaborators { league, intelligence, predictor, repository };

        Ok(ServiceState { config, collaborators, is_running: Arc::new(RwLock::new(false)) })
    }

    /// Recovery is a no-op for the in-memory reference repository: every
    /// restart starts from an empty state and the first refresh repopulates
    /// it from the JSON snapshot adapters.
    pub async fn recover_system_state(&self) -> Result<()> {
        info!("no persisted state to recover, starting from an empty repository");
        Ok(())
    }

    pub async fn is_running(&self) -> bool {
        *self.is_running.read().await
    }

    /// Runs the weekly cycle once against `gameweek`, then learns from
    /// whatever predictions have since resolved.
    pub async fn run_once(&self, gameweek: GameweekId) -> Result<()> {
        {
            let mut running = self.is_running.write().await;
            *running = true;
        }

        let result = run_weekly_cycle(&self.collaborators, &self.config.core, gameweek).await;
        match &result {
            Ok(decision) => info!(
                gameweek = gameweek.0,
                expected_total_points = decision.expected_total_points,
                "weekly cycle complete"
            ),
            Err(e) => error!(gameweek = gameweek.0, error = %e, "weekly cycle failed"),
        }

        if let Err(e) = learn_from_resolved_gameweek(&*self.collaborators.repository, gameweek).await
        {
            warn!(gameweek = gameweek.0, error = %e, "calibration learning step failed");
        }

        {
            let mut running = self.is_running.write().await;
            *running = false;
        }

        result.map(|_| ()).context("weekly cycle failed")
    }

    /// Runs the weekly cycle on a fixed interval until `shutdown` resolves.
    /// The gameweek advances by one every tick; a real deployment would
    /// instead read the upstream's current gameweek each cycle.
    pub async fn run_loop(&self, mut shutdown: tokio::sync::oneshot::Receiver<()>) -> Result<()> {
        let mut gameweek = 1u32;
        let interval_secs = self.config.service.cycle_interval_secs.max(1);
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.run_once(GameweekId(gameweek)).await {
                        error!(error = %e, "scheduled cycle failed, will retry next tick");
                    }
                    gameweek += 1;
                }
                _ = &mut shutdown => {
                    info!("shutdown signal received, stopping run loop");
                    break;
                }
            }
        }
        Ok(())
    }

    pub async fn shutdown(&self) -> Result<()> {
        info!("initiating graceful shutdown");
        let mut running = self.is_running.write().await;
        *running = false;
        Ok(())
    }
}
