//! Applies upstream availability, classified intelligence, sentiment,
//! calibration and a premium-asset floor to raw predictions, producing the
//! expected-points values the optimiser consumes. Every step's effect is
//! recorded in the resulting [`data_model::AdjustedPrediction`] audit trail.

pub mod availability;
pub mod chain;

pub use availability::{availability_multiplier, injured_multiplier};
pub use chain::{
    adjust_prediction, AdjustmentContext, CALIBRATION_MIN_SAMPLES_BRACKET,
    CALIBRATION_MIN_SAMPLES_POSITION, PREMIUM_FLOOR_FACTOR, PREMIUM_FORM_FLOOR,
    PREMIUM_PRICE_FLOOR_UNITS,
};
