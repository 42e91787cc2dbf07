//! Squad, transfer and chip validation.

use crate::error::{Result, RulesError};
use data_model::{Chip, ClubId, Player, PlayerId, Position, SeasonHalf, Squad};
use std::collections::HashMap;

pub const SQUAD_SIZE: usize = 15;
pub const STARTING_XI_SIZE: usize = 11;
pub const CLUB_CAP: usize = 3;
pub const DEFAULT_BUDGET: i32 = 1000;

pub const POSITION_LIMITS: [(Position, usize, usize); 4] = [
    (Position::Gk, 2, 2),
    (Position::Def, 3, 5),
    (Position::Mid, 2, 5),
    (Position::Fwd, 1, 3),
];

fn position_of<'a>(players: &'a HashMap<PlayerId, &'a Player>, id: PlayerId) -> Position {
    players[&id].position
}

/// Validates the full 15-player squad: composition, club cap and budget.
/// `players` must contain an entry for every pick in `squad`.
pub fn validate_squad(
    squad: &Squad,
    players: &HashMap<PlayerId, &Player>,
    budget: i32,
) -> Result<()> {
    if squad.picks.len() != SQUAD_SIZE {
        return Err(RulesError::WrongSquadSize { actual: squad.picks.len() });
    }

    for (position, min, max) in POSITION_LIMITS {
        let count = squad.picks.iter().filter(|p| position_of(players, p.player) == position).count();
        if count < min || count > max {
            return Err(RulesError::PositionCountOutOfRange { position, actual: count, min, max });
        }
    }

    let mut per_club: HashMap<ClubId, usize> = HashMap::new();
    for pick in &squad.picks {
        *per_club.entry(players[&pick.player].club).or_insert(0) += 1;
    }
    for (club, count) in per_club {
        if count > CLUB_CAP {
            return Err(RulesError::ClubCapExceeded { club, count, cap: CLUB_CAP });
        }
    }

    let total_cost = squad.total_cost();
    if total_cost > budget {
        return Err(RulesError::BudgetExceeded { total_cost, budget });
    }

    validate_starting_xi(squad, players)?;
    validate_captaincy(squad)?;

    Ok(())
}

fn validate_starting_xi(squad: &Squad, players: &HashMap<PlayerId, &Player>) -> Result<()> {
    let starters: Vec<_> = squad.starting_xi().collect();
    if starters.len() != STARTING_XI_SIZE {
        return Err(RulesError::StartingXiWrongSize { actual: starters.len() });
    }

    let gk_count = starters.iter().filter(|p| position_of(players, p.player) == Position::Gk).count();
    if gk_count != 1 {
        return Err(RulesError::StartingXiGoalkeeperCount { actual: gk_count });
    }

    let def_count = starters.iter().filter(|p| position_of(players, p.player) == Position::Def).count();
    if def_count < 3 {
        return Err(RulesError::StartingXiTooFewDefenders { actual: def_count });
    }

    let fwd_count = starters.iter().filter(|p| position_of(players, p.player) == Position::Fwd).count();
    if fwd_count < 1 {
        return Err(RulesError::StartingXiTooFewForwards { actual: fwd_count });
    }

    Ok(())
}

fn validate_captaincy(squad: &Squad) -> Result<()> {
    let captains: Vec<_> = squad.picks.iter().filter(|p| p.is_captain).collect();
    if captains.len() != 1 {
        return Err(RulesError::CaptainCount { actual: captains.len() });
    }
    let vices: Vec<_> = squad.picks.iter().filter(|p| p.is_vice).collect();
    if vices.len() != 1 {
        return Err(RulesError::ViceCount { actual: vices.len() });
    }
    if captains[0].player == vices[0].player {
        return Err(RulesError::CaptainViceSame);
    }
    if !captains[0].slot.is_starting() {
        return Err(RulesError::CaptainNotStarting);
    }
    if !vices[0].slot.is_starting() {
        return Err(RulesError::ViceNotStarting);
    }
    Ok(())
}

/// Validates a single transfer against the current squad and bank balance,
/// independent of the resulting squad's full composition (callers apply the
/// transfer then re-run `validate_squad`).
pub fn validate_transfer(
    squad: &Squad,
    player_out: PlayerId,
    player_in: PlayerId,
    bank: i32,
    player_in_price: i32,
) -> Result<()> {
    if !squad.contains(player_out) {
        return Err(RulesError::PlayerOutNotInSquad { player: player_out });
    }
    if squad.contains(player_in) {
        return Err(RulesError::PlayerInAlreadyInSquad { player: player_in });
    }

    let selling_price = squad.picks.iter().find(|p| p.player == player_out).unwrap().selling_price;
    let available = bank + selling_price;
    if player_in_price > available {
        return Err(RulesError::InsufficientBudget { needed: player_in_price, available });
    }

    Ok(())
}

/// Checks whether `chip` may be played in `gameweek`'s half, given the set
/// of chips already used and whether the opposing rebuild chip is active
/// this same gameweek.
pub fn can_use_chip(
    chip: Chip,
    half: SeasonHalf,
    used_this_half: &[Chip],
    wildcard_and_free_hit_conflict: bool,
) -> Result<()> {
    if used_this_half.contains(&chip) {
        return Err(RulesError::ChipAlreadyUsedThisHalf { chip, half });
    }
    if wildcard_and_free_hit_conflict
        && matches!(chip, Chip::Wildcard | Chip::FreeHit)
    {
        return Err(RulesError::WildcardFreeHitConflict { gameweek: 0 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_model::{AvailabilityStatus, IctIndices, Pick, Slot};

    fn player(id: u32, position: Position, club: u32, cost: i32) -> Player {
        Player {
            code: id as u64,
            season_id: PlayerId(id),
            display_name: format!("Player {id}"),
            position,
            club: ClubId(club),
            now_cost: cost,
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

    fn standard_squad() -> (Squad, HashMap<PlayerId, Player>) {
        let mut picks = Vec::new();
        let mut pool = HashMap::new();
        let mut id = 1u32;

        // Each player gets a distinct club so the 3-per-club cap is never a
        // concern for squad-composition tests.
        let mut add = |position: Position, count: usize, picks: &mut Vec<Pick>, pool: &mut HashMap<PlayerId, Player>, id: &mut u32| {
            for _ in 0..count {
                pool.insert(PlayerId(*id), player(*id, position, *id, 50));
                picks.push(pick(*id, 0));
                *id += 1;
            }
        };

        add(Position::Gk, 2, &mut picks, &mut pool, &mut id);
        add(Position::Def, 5, &mut picks, &mut pool, &mut id);
        add(Position::Mid, 5, &mut picks, &mut pool, &mut id);
        add(Position::Fwd, 3, &mut picks, &mut pool, &mut id);

        // Layout: indices 0-1 = GK, 2-6 = DEF, 7-11 = MID, 12-14 = FWD.
        // Starting XI (1 GK / 4 DEF / 4 MID / 2 FWD): 0, 2,3,4,5, 7,8,9,10, 12,13
        // Bench: 1, 6, 11, 14
        let starting_indices = [0, 2, 3, 4, 5, 7, 8, 9, 10, 12, 13];
        let bench_indices = [1, 6, 11, 14];
        for (slot, &idx) in starting_indices.iter().enumerate() {
            picks[idx].slot = Slot((slot + 1) as u8);
        }
        for (i, &idx) in bench_indices.iter().enumerate() {
            picks[idx].slot = Slot((12 + i) as u8);
        }
        picks[0].is_captain = true;
        picks[2].is_vice = true;

        (Squad { picks }, pool)
    }

    #[test]
    fn standard_squad_passes_validation() {
        let (squad, pool) = standard_squad();
        let refs: HashMap<_, _> = pool.iter().map(|(k, v)| (*k, v)).collect();
        assert!(validate_squad(&squad, &refs, DEFAULT_BUDGET).is_ok());
    }

    #[test]
    fn wrong_squad_size_rejected() {
        let (mut squad, pool) = standard_squad();
        squad.picks.pop();
        let refs: HashMap<_, _> = pool.iter().map(|(k, v)| (*k, v)).collect();
        assert_eq!(
            validate_squad(&squad, &refs, DEFAULT_BUDGET),
            Err(RulesError::WrongSquadSize { actual: 14 })
        );
    }

    #[test]
    fn chip_reused_in_half_rejected() {
        let result = can_use_chip(Chip::Wildcard, SeasonHalf::First, &[Chip::Wildcard], false);
        assert_eq!(
            result,
            Err(RulesError::ChipAlreadyUsedThisHalf { chip: Chip::Wildcard, half: SeasonHalf::First })
        );
    }

    #[test]
    fn transfer_rejects_player_not_owned() {
        let (squad, _pool) = standard_squad();
        let result = validate_transfer(&squad, PlayerId(999), PlayerId(1000), 0, 50);
        assert_eq!(result, Err(RulesError::PlayerOutNotInSquad { player: PlayerId(999) }));
    }
}
