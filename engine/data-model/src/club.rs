use crate::ids::ClubId;
use serde::{Deserialize, Serialize};

/// Ordinal strength rating. The upstream formula behind these numbers is
/// undocumented; consumers compare them, never treat them as calibrated
/// probabilities.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct VenueStrength {
    pub attack: u16,
    pub defence: u16,
    pub overall: u16,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct ClubStrength {
    pub home: VenueStrength,
    pub away: VenueStrength,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub short_name: String,
    pub long_name: String,
    pub strength: ClubStrength,
}
