//! Automatic substitution of non-playing starters from the bench,
//! supplementing the closed-form scoring with the same post-deadline
//! reconciliation upstream applies before finalising gameweek points.

use data_model::{Pick, Player, PlayerId, Position, Slot};
use std::collections::HashMap;

/// One substitution the engine would make: bench player replaces a starter
/// who did not play.
#[derive(Clone, Debug, PartialEq)]
pub struct Substitution {
    pub player_out: PlayerId,
    pub player_in: PlayerId,
}

fn played(minutes_by_player: &HashMap<PlayerId, u16>, player: PlayerId) -> bool {
    minutes_by_player.get(&player).copied().unwrap_or(0) > 0
}

/// Replaces starters with zero minutes using the bench in priority order
/// (goalkeeper bench slot only covers the starting goalkeeper), preserving
/// the formation's minimum position counts. Returns the substitutions made,
/// in application order; callers apply them to a copy of the squad.
pub fn apply_automatic_substitutions(
    picks: &[Pick],
    minutes_by_player: &HashMap<PlayerId, u16>,
    players: &HashMap<PlayerId, &Player>,
) -> Vec<Substitution> {
    let mut starters: Vec<Pick> = picks.iter().filter(|p| p.slot.is_starting()).cloned().collect();
    let mut bench: Vec<Pick> = picks.iter().filter(|p| !p.slot.is_starting()).cloned().collect();
    bench.sort_by_key(|p| p.slot.0);

    let mut subs = Vec::new();

    let non_playing: Vec<PlayerId> =
        starters.iter().filter(|p| !played(minutes_by_player, p.player)).map(|p| p.player).collect();

    for out_player in non_playing {
        let out_position = players[&out_player].position;

        let candidate_index = bench.iter().position(|b| {
            if !played(minutes_by_player, b.player) {
                return false;
            }
            let in_position = players[&b.player].position;
            if out_position == Position::Gk {
                return in_position == Position::Gk;
            }
            if in_position == Position::Gk {
                return false;
            }
            formation_stays_legal(&starters, out_player, b.player, players)
        });

        if let Some(idx) = candidate_index {
            let mut replacement = bench.remove(idx);
            let in_player = replacement.player;
            if let Some(starter) = starters.iter_mut().find(|p| p.player == out_player) {
                replacement.slot = starter.slot;
                *starter = replacement;
            }
            subs.push(Substitution { player_out: out_player, player_in: in_player });
        }
    }

    subs
}

fn formation_stays_legal(
    starters: &[Pick],
    out_player: PlayerId,
    in_player: PlayerId,
    players: &HashMap<PlayerId, &Player>,
) -> bool {
    let out_position = players[&out_player].position;
    let in_position = players[&in_player].position;
    if out_position == in_position {
        return true;
    }

    let mut def_count = starters.iter().filter(|p| players[&p.player].position == Position::Def).count();
    let mut fwd_count = starters.iter().filter(|p| players[&p.player].position == Position::Fwd).count();

    if out_position == Position::Def {
        def_count -= 1;
    }
    if out_position == Position::Fwd {
        fwd_count -= 1;
    }
    if in_position == Position::Def {
        def_count += 1;
    }
    if in_position == Position::Fwd {
        fwd_count += 1;
    }

    def_count >= 3 && fwd_count >= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_model::{AvailabilityStatus, ClubId, IctIndices, Slot};

    fn player(id: u32, position: Position) -> Player {
        Player {
            code: id as u64,
            season_id: PlayerId(id),
            display_name: format!("Player {id}"),
            position,
            club: ClubId(1),
            now_cost: 50,
            status: AvailabilityStatus::Available,
            chance_of_playing_percent: None,
            form: 5.0,
            points_per_game: 5.0,
            total_points: 50,
            minutes: 900,
            ict: IctIndices { influence: 0.0, creativity: 0.0, threat: 0.0, ict_index: 0.0 },
            expected_goals: 0.0,
            expected_assists: 0.0,
            selected_by_percent: 10.0,
        }
    }

    fn pick(id: u32, slot: u8) -> Pick {
        Pick {
            player: PlayerId(id),
            slot: Slot(slot),
            purchase_price: 50,
            selling_price: 50,
            is_captain: false,
            is_vice: false,
            multiplier: 1,
        }
    }

    #[test]
    fn blank_forward_replaced_by_playing_bench_forward() {
        let picks = vec![pick(1, 1), pick(2, 12)];
        let mut players: HashMap<PlayerId, Player> = HashMap::new();
        players.insert(PlayerId(1), player(1, Position::Fwd));
        players.insert(PlayerId(2), player(2, Position::Fwd));
        let refs: HashMap<_, _> = players.iter().map(|(k, v)| (*k, v)).collect();

        let mut minutes = HashMap::new();
        minutes.insert(PlayerId(1), 0);
        minutes.insert(PlayerId(2), 90);

        let subs = apply_automatic_substitutions(&picks, &minutes, &refs);
        assert_eq!(subs, vec![Substitution { player_out: PlayerId(1), player_in: PlayerId(2) }]);
    }

    #[test]
    fn no_substitution_when_bench_also_blank() {
        let picks = vec![pick(1, 1), pick(2, 12)];
        let mut players: HashMap<PlayerId, Player> = HashMap::new();
        players.insert(PlayerId(1), player(1, Position::Fwd));
        players.insert(PlayerId(2), player(2, Position::Fwd));
        let refs: HashMap<_, _> = players.iter().map(|(k, v)| (*k, v)).collect();

        let mut minutes = HashMap::new();
        minutes.insert(PlayerId(1), 0);
        minutes.insert(PlayerId(2), 0);

        let subs = apply_automatic_substitutions(&picks, &minutes, &refs);
        assert!(subs.is_empty());
    }
}
