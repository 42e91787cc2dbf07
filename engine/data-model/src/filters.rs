use crate::ids::ClubId;
use crate::player::{AvailabilityStatus, Position};

#[derive(Clone, Debug, Default)]
pub struct PlayerFilter {
    pub position: Option<Position>,
    pub max_price: Option<i32>,
    pub min_price: Option<i32>,
    pub status: Option<AvailabilityStatus>,
    pub club: Option<ClubId>,
}
