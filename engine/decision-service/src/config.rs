//! Configuration loading and validation.

use anyhow::{Context, Result};
use rules_engine::pricing::FreeTransferTopup;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The gameweek boundaries splitting the season into two chip halves: each
/// of Wildcard, Bench Boost, Triple Captain and Free Hit may be played once
/// per half. Defaults to the published split, GW1..=19 and GW20..=38.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct ChipHalves {
    pub first_half_last_gw: u8,
    pub season_last_gw: u8,
}

impl Default for ChipHalves {
    fn default() -> Self {
        ChipHalves { first_half_last_gw: 19, season_last_gw: 38 }
    }
}

/// The tunable thresholds and limits every component consults. Defaults
/// match the published ruleset; everything else is a policy choice an
/// operator may override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionCoreSettings {
    pub initial_budget: i32,
    pub max_club_players: usize,
    pub max_banked_transfers: u32,
    pub hit_point_cost: i32,
    pub horizon_gameweeks: u8,
    pub transfer_gain_threshold_default: f64,
    pub hit_threshold_strong: f64,
    pub hit_threshold_marginal: f64,
    pub min_actionable_confidence: f64,
    pub min_player_match_score: f64,
    pub premium_price_floor: i32,
    pub premium_form_floor: f64,
    pub calibration_min_samples_position: u32,
    pub calibration_min_samples_bracket: u32,
    pub threshold_learning_min_samples: u32,
    pub intelligence_ttl_days: i64,
    pub transcript_ttl_days: i64,
    pub chip_halves: ChipHalves,
    /// Special-event free-transfer top-ups (AFCON call-ups and the like).
    /// Empty by default; an operator adds an entry for each season event.
    pub ft_topups: Vec<FreeTransferTopup>,
}

impl Default for DecisionCoreSettings {
    fn default() -> Self {
        DecisionCoreSettings {
            initial_budget: 1000,
            max_club_players: 3,
            max_banked_transfers: 5,
            hit_point_cost: 4,
            horizon_gameweeks: 4,
            transfer_gain_threshold_default: 2.0,
            hit_threshold_strong: 8.0,
            hit_threshold_marginal: 4.0,
            min_actionable_confidence: 0.6,
            min_player_match_score: 70.0,
            premium_price_floor: 120,
            premium_form_floor: 5.0,
            calibration_min_samples_position: 20,
            calibration_min_samples_bracket: 30,
            threshold_learning_min_samples: 5,
            intelligence_ttl_days: 30,
            transcript_ttl_days: 7,
            chip_halves: ChipHalves::default(),
            ft_topups: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub data_dir: PathBuf,
    pub config_file: Option<PathBuf>,
    pub development_mode: bool,
    pub startup_timeout_secs: u64,
    pub shutdown_timeout_secs: u64,
    /// Seconds between scheduled weekly-cycle runs in the long-lived service.
    pub cycle_interval_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        ServiceSettings {
            data_dir: PathBuf::from("./data"),
            config_file: None,
            development_mode: false,
            startup_timeout_secs: 30,
            shutdown_timeout_secs: 30,
            cycle_interval_secs: 3600 * 24 * 7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: "info".into(), format: "pretty".into(), file: None, structured: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub port: u16,
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        MetricsConfig { enabled: true, port: 9464, path: "/metrics".into() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub core: DecisionCoreSettings,
    pub service: ServiceSettings,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

/// Loads configuration from an optional file plus environment overrides,
/// then validates it. The file layer is optional; env and defaults alone
/// are a valid configuration.
pub fn load_config() -> Result<ServiceConfig> {
    let mut cfg = ServiceConfig::default();
    if let Ok(path) = std::env::var("DECISION_CORE_CONFIG_FILE") {
        cfg = load_from_file(&PathBuf::from(path))?;
    }
    load_from_env(&mut cfg);
    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn load_from_file(path: &std::path::Path) -> Result<ServiceConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .with_context(|| format!("failed to read configuration file {}", path.display()))?;
    settings.try_deserialize().context("failed to parse configuration file")
}

/// Reads `DECISION_CORE_*` overrides. Unset variables leave the existing
/// value untouched.
pub fn load_from_env(cfg: &mut ServiceConfig) {
    if let Ok(level) = std::env::var("DECISION_CORE_LOG_LEVEL") {
        cfg.logging.level = level;
    }
    if let Ok(format) = std::env::var("DECISION_CORE_LOG_FORMAT") {
        cfg.logging.format = format;
    }
    if let Ok(dev) = std::env::var("DECISION_CORE_DEV_MODE") {
        cfg.service.development_mode = dev == "1" || dev.eq_ignore_ascii_case("true");
    }
    if let Ok(dir) = std::env::var("DECISION_CORE_DATA_DIR") {
        cfg.service.data_dir = PathBuf::from(dir);
    }
    if let Ok(horizon) = std::env::var("DECISION_CORE_HORIZON_GAMEWEEKS") {
        if let Ok(value) = horizon.parse() {
            cfg.core.horizon_gameweeks = value;
        }
    }
}

const ALLOWED_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const ALLOWED_LOG_FORMATS: [&str; 2] = ["pretty", "json"];

pub fn validate_config(cfg: &ServiceConfig) -> Result<()> {
    if !cfg.service.data_dir.exists() {
        std::fs::create_dir_all(&cfg.service.data_dir).with_context(|| {
            format!("failed to create data directory {}", cfg.service.data_dir.display())
        })?;
    }
    if !ALLOWED_LOG_LEVELS.contains(&cfg.logging.level.as_str()) {
        anyhow::bail!("invalid log level: {}", cfg.logging.level);
    }
    if !ALLOWED_LOG_FORMATS.contains(&cfg.logging.format.as_str()) {
        anyhow::bail!("invalid log format: {}", cfg.logging.format);
    }
    if cfg.metrics.enabled && cfg.metrics.port == 0 {
        anyhow::bail!("metrics port must be nonzero when metrics are enabled");
    }
    if cfg.core.horizon_gameweeks == 0 {
        anyhow::bail!("horizon_gameweeks must be at least 1");
    }
    Ok(())
}
