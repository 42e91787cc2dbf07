//! Turns adjusted expected-points predictions into a concrete gameweek
//! draft: which players to transfer in and out, the starting formation,
//! bench order and captaincy. Every draft this crate produces is
//! re-validated against the rules engine before being handed back; a
//! validation failure here means this crate has a bug, not that the input
//! was bad.

pub mod error;
pub mod formation;
pub mod ranking;
pub mod transfers;

pub use error::{OptimiserError, Result};
pub use formation::{assign_slots_and_captaincy, order_bench, select_formation, FormationChoice, PlayerInfo};
pub use ranking::{find_replacement, rank_weakest_first};
pub use transfers::{evaluate_transfer, wildcard_should_trigger, ProposedTransfer, TransferDecision};

use data_model::{ClubId, Player, PlayerId, Position, Squad};
use rules_engine::validate_squad;
use std::collections::HashMap;

/// A finished draft: the squad with slots, captaincy and prices assigned,
/// plus the transfers applied to reach it.
#[derive(Clone, Debug)]
pub struct Draft {
    pub squad: Squad,
    pub transfers_applied: Vec<ProposedTransfer>,
}

/// Builds a draft from the current squad and a pool of adjusted
/// expected-points values covering at least every current squad member.
/// Refuses to proceed if prediction coverage is incomplete, since a
/// partial picture of the squad cannot be safely optimised. The captain's
/// multiplier is 2, or 3 if `triple_captain_active`.
#[allow(clippy::too_many_arguments)]
pub fn build_draft(
    current_squad_members: &[PlayerId],
    players: &HashMap<PlayerId, &Player>,
    adjusted_xp: &HashMap<PlayerId, f64>,
    purchase_price: &HashMap<PlayerId, i32>,
    selling_price: &HashMap<PlayerId, i32>,
    transfers_applied: Vec<ProposedTransfer>,
    budget: i32,
    triple_captain_active: bool,
) -> Result<Draft> {
    let missing = current_squad_members
        .iter()
        .filter(|id| !adjusted_xp.contains_key(id))
        .count();
    if missing > 0 {
        return Err(OptimiserError::IncompletePredictionCoverage {
            missing,
            total: current_squad_members.len(),
        });
    }

    let info: HashMap<PlayerId, PlayerInfo> = current_squad_members
        .iter()
        .map(|&id| {
            let player = players[&id];
            (
                id,
                PlayerInfo {
                    position: player.position,
                    club: player.club,
                    adjusted_xp: adjusted_xp[&id],
                },
            )
        })
        .collect();

    let formation = select_formation(current_squad_members, &info).ok_or(OptimiserError::NoLegalFormation)?;
    let starters: Vec<PlayerId> = formation.starters();
    let bench_members: Vec<PlayerId> = current_squad_members
        .iter()
        .filter(|id| !starters.contains(id))
        .copied()
        .collect();
    let bench_order = order_bench(&bench_members, &info);

    let picks = assign_slots_and_captaincy(
        &formation,
        &bench_order,
        &info,
        purchase_price,
        selling_price,
        triple_captain_active,
    );
    let squad = Squad { picks };

    validate_squad(&squad, players, budget)?;

    Ok(Draft { squad, transfers_applied })
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_model::{AvailabilityStatus, IctIndices};

    fn player(id: u32, position: Position, club: u32) -> Player {
        Player {
            code: id as u64,
            season_id: PlayerId(id),
            display_name: format!("P{id}"),
            position,
            club: ClubId(club),
            now_cost: 50,
            status: AvailabilityStatus::Available,
            chance_of_playing_percent: Some(100),
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

    fn standard_squad() -> (Vec<PlayerId>, HashMap<PlayerId, Player>) {
        let mut pool = HashMap::new();
        let mut members = Vec::new();
        let mut id = 1u32;
        let mut push = |position, count: u32, pool: &mut HashMap<PlayerId, Player>, members: &mut Vec<PlayerId>, id: &mut u32| {
            for _ in 0..count {
                pool.insert(PlayerId(*id), player(*id, position, *id));
                members.push(PlayerId(*id));
                *id += 1;
            }
        };
        push(Position::Gk, 2, &mut pool, &mut members, &mut id);
        push(Position::Def, 5, &mut pool, &mut members, &mut id);
        push(Position::Mid, 5, &mut pool, &mut members, &mut id);
        push(Position::Fwd, 3, &mut pool, &mut members, &mut id);
        (members, pool)
    }

    #[test]
    fn incomplete_coverage_is_refused() {
        let (members, pool) = standard_squad();
        let refs: HashMap<_, _> = pool.iter().map(|(k, v)| (*k, v)).collect();
        let mut xp = HashMap::new();
        for &id in &members[..members.len() - 1] {
            xp.insert(id, 4.0);
        }
        let result = build_draft(&members, &refs, &xp, &HashMap::new(), &HashMap::new(), vec![], 1000, false);
        assert!(matches!(result, Err(OptimiserError::IncompletePredictionCoverage { missing: 1, .. })));
    }

    #[test]
    fn complete_coverage_produces_a_valid_draft() {
        let (members, pool) = standard_squad();
        let refs: HashMap<_, _> = pool.iter().map(|(k, v)| (*k, v)).collect();
        let mut xp = HashMap::new();
        for (i, &id) in members.iter().enumerate() {
            xp.insert(id, 4.0 + i as f64 * 0.1);
        }
        let draft = build_draft(&members, &refs, &xp, &HashMap::new(), &HashMap::new(), vec![], 1000, false).unwrap();
        assert_eq!(draft.squad.picks.len(), 15);
        assert_eq!(draft.squad.starting_xi().count(), 11);
        assert!(draft.squad.captain().is_some());
        assert!(draft.squad.vice().is_some());
    }

    #[test]
    fn triple_captain_triples_the_captains_multiplier() {
        let (members, pool) = standard_squad();
        let refs: HashMap<_, _> = pool.iter().map(|(k, v)| (*k, v)).collect();
        let mut xp = HashMap::new();
        for (i, &id) in members.iter().enumerate() {
            xp.insert(id, 4.0 + i as f64 * 0.1);
        }
        let draft = build_draft(&members, &refs, &xp, &HashMap::new(), &HashMap::new(), vec![], 1000, true).unwrap();
        let captain = draft.squad.captain().unwrap();
        assert_eq!(captain.multiplier, 3);
    }
}
