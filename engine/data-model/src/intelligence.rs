use crate::ids::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum RawSignalType {
    Injury,
    Rotation,
    Suspension,
    PressConference,
    LineupLeak,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// What the classifier believes about a player's availability or standing,
/// independent of its confidence in that belief.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum SignalStatus {
    Injured,
    Doubtful,
    Suspended,
    Positive,
    Negative,
    Neutral,
}

/// A raw, unclassified item from an `IntelligenceSource`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawSignal {
    pub source_id: String,
    pub source_reliability: f64,
    pub raw_type: RawSignalType,
    pub player_name: String,
    pub detail: String,
    pub observed_at: DateTime<Utc>,
}

/// The classifier's output, ready for the prediction adjuster to consume.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntelligenceSignal {
    pub timestamp: DateTime<Utc>,
    pub source_id: String,
    pub source_reliability: f64,
    pub raw_type: RawSignalType,
    pub matched_player: Option<PlayerId>,
    pub match_score: f64,
    pub confidence: f64,
    pub severity: Severity,
    pub status: SignalStatus,
    pub actionable: bool,
    pub detail: String,
}
