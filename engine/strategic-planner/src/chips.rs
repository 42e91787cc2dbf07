use data_model::{Chip, SeasonHalf};

pub const WILDCARD_FIRST_HALF_WINDOW: (u8, u8) = (10, 15);
pub const WILDCARD_URGENT_GWS_BEFORE_DEADLINE: u8 = 2;
pub const FREE_HIT_SAVE_UNTIL_GWS_BEFORE_DEADLINE: u8 = 2;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Clone, Debug)]
pub struct ChipRecommendation {
    pub chip: Chip,
    pub recommended_gameweek: Option<u8>,
    pub urgency: Urgency,
    pub window: SeasonHalf,
}

#[derive(Copy, Clone, Debug)]
pub struct DoubleGameweek {
    pub gameweek: u8,
    pub clubs_playing_twice: usize,
}

#[derive(Copy, Clone, Debug)]
pub struct BlankGameweek {
    pub gameweek: u8,
}

/// Favours a mid-season window in the first half (GW10-15); in the second
/// half, favours the gameweek immediately before the best double gameweek.
/// Becomes urgent once the half's deadline is within
/// [`WILDCARD_URGENT_GWS_BEFORE_DEADLINE`] gameweeks and the chip is still
/// unused.
pub fn recommend_wildcard(
    current_gw: u8,
    half: SeasonHalf,
    half_deadline_gw: u8,
    upcoming_double_gws: &[DoubleGameweek],
) -> ChipRecommendation {
    let urgency = if half_deadline_gw.saturating_sub(current_gw) <= WILDCARD_URGENT_GWS_BEFORE_DEADLINE {
        Urgency::High
    } else {
        Urgency::Medium
    };

    let recommended_gameweek = match half {
        SeasonHalf::First => Some(WILDCARD_FIRST_HALF_WINDOW.0.max(current_gw)),
        SeasonHalf::Second => upcoming_double_gws
            .iter()
            .max_by_key(|d| d.clubs_playing_twice)
            .map(|d| d.gameweek.saturating_sub(1).max(current_gw)),
    };

    ChipRecommendation { chip: Chip::Wildcard, recommended_gameweek, urgency, window: half }
}

/// Targets the double gameweek with the most clubs playing twice inside
/// the half's remaining window.
pub fn recommend_bench_boost(half: SeasonHalf, upcoming_double_gws: &[DoubleGameweek]) -> ChipRecommendation {
    let best = upcoming_double_gws.iter().max_by_key(|d| d.clubs_playing_twice);
    let urgency = if best.is_some() { Urgency::Medium } else { Urgency::Low };
    ChipRecommendation {
        chip: Chip::BenchBoost,
        recommended_gameweek: best.map(|d| d.gameweek),
        urgency,
        window: half,
    }
}

/// Targets a double gameweek with a premium asset if one exists; otherwise
/// falls back to the best single fixture the caller identified.
pub fn recommend_triple_captain(
    half: SeasonHalf,
    upcoming_double_gws: &[DoubleGameweek],
    exceptional_single_fixture_gw: Option<u8>,
) -> ChipRecommendation {
    let best_double = upcoming_double_gws.iter().max_by_key(|d| d.clubs_playing_twice);
    let (recommended_gameweek, urgency) = match best_double {
        Some(d) => (Some(d.gameweek), Urgency::Medium),
        None => (exceptional_single_fixture_gw, Urgency::Low),
    };
    ChipRecommendation { chip: Chip::TripleCaptain, recommended_gameweek, urgency, window: half }
}

/// Targets the earliest upcoming blank gameweek; if none exists, saves the
/// chip until [`FREE_HIT_SAVE_UNTIL_GWS_BEFORE_DEADLINE`] gameweeks before
/// the half's deadline.
pub fn recommend_free_hit(
    half: SeasonHalf,
    upcoming_blank_gws: &[BlankGameweek],
    half_deadline_gw: u8,
) -> ChipRecommendation {
    let earliest_blank = upcoming_blank_gws.iter().map(|b| b.gameweek).min();
    let (recommended_gameweek, urgency) = match earliest_blank {
        Some(gw) => (Some(gw), Urgency::High),
        None => (
            Some(half_deadline_gw.saturating_sub(FREE_HIT_SAVE_UNTIL_GWS_BEFORE_DEADLINE)),
            Urgency::Low,
        ),
    };
    ChipRecommendation { chip: Chip::FreeHit, recommended_gameweek, urgency, window: half }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_urgent_near_half_deadline() {
        let rec = recommend_wildcard(18, SeasonHalf::First, 19, &[]);
        assert_eq!(rec.urgency, Urgency::High);
    }

    #[test]
    fn bench_boost_targets_biggest_double_gameweek() {
        let doubles = vec![
            DoubleGameweek { gameweek: 26, clubs_playing_twice: 4 },
            DoubleGameweek { gameweek: 34, clubs_playing_twice: 8 },
        ];
        let rec = recommend_bench_boost(SeasonHalf::Second, &doubles);
        assert_eq!(rec.recommended_gameweek, Some(34));
    }

    #[test]
    fn free_hit_targets_earliest_blank_gameweek() {
        let blanks = vec![BlankGameweek { gameweek: 29 }, BlankGameweek { gameweek: 33 }];
        let rec = recommend_free_hit(SeasonHalf::Second, &blanks, 38);
        assert_eq!(rec.recommended_gameweek, Some(29));
        assert_eq!(rec.urgency, Urgency::High);
    }

    #[test]
    fn free_hit_saves_until_near_deadline_with_no_blank() {
        let rec = recommend_free_hit(SeasonHalf::First, &[], 19);
        assert_eq!(rec.recommended_gameweek, Some(17));
        assert_eq!(rec.urgency, Urgency::Low);
    }
}
