//! Closed-form scoring, squad/transfer/chip validation and price
//! arithmetic. Nothing in this crate is learned or tuned; every function is
//! a pure, deterministic application of the published ruleset.

pub mod error;
pub mod pricing;
pub mod scoring;
pub mod substitutions;
pub mod validation;

pub use error::{Result, RulesError};
pub use pricing::{accrue_free_transfers, selling_price, transfer_cost, FreeTransferTopup};
pub use scoring::{
    calculate_points, difficulty_multiplier, expected_points_fallback, Per90Rates, PointsBreakdown,
};
pub use substitutions::{apply_automatic_substitutions, Substitution};
pub use validation::{can_use_chip, validate_squad, validate_transfer, DEFAULT_BUDGET};
