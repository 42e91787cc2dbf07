//! Runs once a gameweek resolves: joins predictions with actuals to
//! produce calibration corrections for the next cycle, adapts per-position
//! transfer thresholds from completed transfer outcomes, and measures how
//! much the chosen captain left on the table. Every output here is
//! versioned by the gameweek it was produced from and consulted, never
//! silently mutated, by the components that read it next cycle.

pub mod captain_analysis;
pub mod metrics;
pub mod review;
pub mod threshold_learning;

pub use captain_analysis::{analyze_captain_choice, CaptainAnalysis, StarterResult};
pub use metrics::{error_metrics, ErrorMetrics};
pub use review::{derive_corrections, review_predictions, PredictionReview, ResolvedPrediction};
pub use threshold_learning::{adapt_threshold, TransferOutcome};
