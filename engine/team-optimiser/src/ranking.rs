use data_model::{Player, PlayerId, Position, Squad};
use std::collections::HashMap;

pub const DEFAULT_PRICE_HEADROOM: i32 = 10;
pub const DEFAULT_MIN_CHANCE_OF_PLAYING: u8 = 75;

/// Current squad members ordered weakest-first by adjusted expected points.
/// Players missing from `adjusted_xp` sort last (treated as zero).
pub fn rank_weakest_first<'a>(
    squad: &'a Squad,
    adjusted_xp: &HashMap<PlayerId, f64>,
) -> Vec<&'a data_model::Pick> {
    let mut picks: Vec<&data_model::Pick> = squad.picks.iter().collect();
    picks.sort_by(|a, b| {
        let xa = adjusted_xp.get(&a.player).copied().unwrap_or(0.0);
        let xb = adjusted_xp.get(&b.player).copied().unwrap_or(0.0);
        xa.partial_cmp(&xb).unwrap_or(std::cmp::Ordering::Equal)
    });
    picks
}

/// Finds the best replacement for `outgoing` among `pool`: same position,
/// price at most `outgoing`'s selling price plus `headroom`, chance of
/// playing at least `min_chance`, highest adjusted expected points.
pub fn find_replacement(
    outgoing: &Player,
    outgoing_selling_price: i32,
    squad: &Squad,
    pool: &[&Player],
    adjusted_xp: &HashMap<PlayerId, f64>,
    headroom: i32,
    min_chance: u8,
) -> Option<PlayerId> {
    let budget = outgoing_selling_price + headroom;

    pool.iter()
        .filter(|p| p.position == outgoing.position)
        .filter(|p| p.now_cost <= budget)
        .filter(|p| !squad.contains(p.season_id))
        .filter(|p| p.chance_of_playing_percent.unwrap_or(100) >= min_chance)
        .max_by(|a, b| {
            let xa = adjusted_xp.get(&a.season_id).copied().unwrap_or(0.0);
            let xb = adjusted_xp.get(&b.season_id).copied().unwrap_or(0.0);
            xa.partial_cmp(&xb).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.season_id)
}
