use data_model::AvailabilityStatus;

/// Step-function multiplier for an injured player by chance-of-playing
/// percent. When the percentage is unknown, the conservative ≤25% bucket
/// is used rather than assuming fitness.
pub fn injured_multiplier(chance_of_playing_percent: Option<u8>) -> f64 {
    match chance_of_playing_percent {
        Some(0) => 0.10,
        Some(p) if p <= 25 => 0.30,
        Some(p) if p <= 50 => 0.60,
        Some(p) if p <= 75 => 0.80,
        Some(_) => 1.00,
        None => 0.30,
    }
}

/// The authoritative upstream-availability multiplier. `Unavailable` and
/// `Suspended` override everything downstream with zero; `Injured` applies
/// the step function; `Available`/`Doubtful` pass through unchanged —
/// classified intelligence (not upstream status) covers doubt.
pub fn availability_multiplier(status: AvailabilityStatus, chance_of_playing_percent: Option<u8>) -> f64 {
    match status {
        AvailabilityStatus::Unavailable | AvailabilityStatus::Suspended => 0.0,
        AvailabilityStatus::Injured => injured_multiplier(chance_of_playing_percent),
        AvailabilityStatus::Available | AvailabilityStatus::Doubtful => 1.0,
    }
}
