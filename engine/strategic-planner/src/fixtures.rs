use data_model::{ClubId, ClubStrength, Fixture};
use std::collections::HashMap;

pub const TARGET_MAX_AVG_DIFFICULTY: f64 = 2.5;
pub const AVOID_MIN_AVG_DIFFICULTY: f64 = 3.5;
pub const SWING_THRESHOLD: f64 = 1.0;

/// Weight given to the raw fixture-difficulty rating versus the normalised
/// opponent-strength component when blending the two into one effective
/// difficulty. The upstream strength scale is undocumented and ordinal
/// only, so it is a minority input rather than a replacement for the
/// league's own difficulty rating.
pub const OPPONENT_STRENGTH_WEIGHT: f64 = 0.3;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ClubOutlook {
    Target,
    Avoid,
    Hold,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FixtureSwing {
    Favourable,
    Unfavourable,
}

#[derive(Clone, Debug)]
pub struct FixtureOutlook {
    pub club: ClubId,
    pub average_difficulty: f64,
    pub classification: ClubOutlook,
    pub swing: Option<FixtureSwing>,
}

fn effective_difficulty(
    opponent: ClubId,
    base_difficulty: u8,
    is_home: bool,
    opponent_strengths: &HashMap<ClubId, ClubStrength>,
    league_max_overall_strength: u16,
) -> f64 {
    let opponent_overall = opponent_strengths
        .get(&opponent)
        .map(|s| if is_home { s.away.overall } else { s.home.overall })
        .unwrap_or(league_max_overall_strength / 2);

    let normalised = if league_max_overall_strength == 0 {
        0.5
    } else {
        (opponent_overall as f64 / league_max_overall_strength as f64).clamp(0.0, 1.0)
    };

    (1.0 - OPPONENT_STRENGTH_WEIGHT) * base_difficulty as f64 + OPPONENT_STRENGTH_WEIGHT * (normalised * 5.0)
}

/// Analyses `club`'s fixtures across a 3-6 gameweek horizon, classifying
/// its overall outlook and detecting a swing in difficulty between the
/// first and last third of the horizon. `fixtures` must already be
/// restricted to this club and sorted by gameweek.
pub fn analyze_fixtures(
    club: ClubId,
    fixtures: &[Fixture],
    opponent_strengths: &HashMap<ClubId, ClubStrength>,
    league_max_overall_strength: u16,
) -> Option<FixtureOutlook> {
    if fixtures.is_empty() {
        return None;
    }

    let difficulties: Vec<f64> = fixtures
        .iter()
        .filter_map(|f| f.perspective_of(club))
        .map(|(opponent, difficulty, is_home)| {
            effective_difficulty(opponent, difficulty, is_home, opponent_strengths, league_max_overall_strength)
        })
        .collect();

    if difficulties.is_empty() {
        return None;
    }

    let average_difficulty = difficulties.iter().sum::<f64>() / difficulties.len() as f64;
    let classification = if average_difficulty <= TARGET_MAX_AVG_DIFFICULTY {
        ClubOutlook::Target
    } else if average_difficulty >= AVOID_MIN_AVG_DIFFICULTY {
        ClubOutlook::Avoid
    } else {
        ClubOutlook::Hold
    };

    let swing = detect_swing(&difficulties);

    Some(FixtureOutlook { club, average_difficulty, classification, swing })
}

fn detect_swing(difficulties: &[f64]) -> Option<FixtureSwing> {
    let third = (difficulties.len() / 3).max(1);
    if difficulties.len() < 2 {
        return None;
    }
    let first_third = &difficulties[..third];
    let last_third = &difficulties[difficulties.len() - third..];

    let first_avg = first_third.iter().sum::<f64>() / first_third.len() as f64;
    let last_avg = last_third.iter().sum::<f64>() / last_third.len() as f64;
    let delta = last_avg - first_avg;

    if delta >= SWING_THRESHOLD {
        Some(FixtureSwing::Unfavourable)
    } else if delta <= -SWING_THRESHOLD {
        Some(FixtureSwing::Favourable)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use data_model::{FixtureId, GameweekId, VenueStrength};

    fn fixture(id: u32, gw: u32, home: u32, away: u32, home_diff: u8, away_diff: u8) -> Fixture {
        Fixture {
            id: FixtureId(id),
            gameweek: GameweekId(gw),
            home_club: ClubId(home),
            away_club: ClubId(away),
            kickoff: Utc::now(),
            home_difficulty: home_diff,
            away_difficulty: away_diff,
            finished: false,
            home_score: None,
            away_score: None,
        }
    }

    #[test]
    fn easy_run_classified_as_target() {
        let fixtures = vec![
            fixture(1, 1, 1, 2, 2, 4),
            fixture(2, 2, 1, 3, 2, 4),
            fixture(3, 3, 1, 4, 2, 4),
        ];
        let outlook = analyze_fixtures(ClubId(1), &fixtures, &HashMap::new(), 1200).unwrap();
        assert_eq!(outlook.classification, ClubOutlook::Target);
    }

    #[test]
    fn increasing_difficulty_flags_unfavourable_swing() {
        let fixtures = vec![
            fixture(1, 1, 1, 2, 1, 4),
            fixture(2, 2, 1, 3, 3, 4),
            fixture(3, 3, 1, 4, 5, 4),
        ];
        let outlook = analyze_fixtures(ClubId(1), &fixtures, &HashMap::new(), 1200).unwrap();
        assert_eq!(outlook.swing, Some(FixtureSwing::Unfavourable));
    }

    #[test]
    fn opponent_strength_nudges_blended_difficulty() {
        let mut strengths = HashMap::new();
        strengths.insert(
            ClubId(2),
            ClubStrength {
                home: VenueStrength { attack: 1300, defence: 1300, overall: 1300 },
                away: VenueStrength { attack: 1300, defence: 1300, overall: 1300 },
            },
        );
        let fixtures = vec![fixture(1, 1, 1, 2, 3, 3)];
        let outlook = analyze_fixtures(ClubId(1), &fixtures, &strengths, 1300).unwrap();
        // Base difficulty 3 blended with a maximal opponent-strength term
        // should push the effective difficulty above the raw rating.
        assert!(outlook.average_difficulty > 3.0);
    }
}
