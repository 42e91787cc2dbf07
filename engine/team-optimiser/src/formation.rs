use data_model::{ClubId, Pick, PlayerId, Position, Slot};
use std::collections::HashMap;

/// Legal outfield formations: (defenders, midfielders, forwards), always
/// summing to 10 alongside the fixed single starting goalkeeper.
pub const LEGAL_FORMATIONS: [(usize, usize, usize); 8] = [
    (3, 4, 3),
    (3, 5, 2),
    (4, 3, 3),
    (4, 4, 2),
    (4, 5, 1),
    (5, 2, 3),
    (5, 3, 2),
    (5, 4, 1),
];

pub struct PlayerInfo {
    pub position: Position,
    pub club: ClubId,
    pub adjusted_xp: f64,
}

/// Chooses a starting XI (and implicitly a bench) from the 15-player squad
/// maximising the sum of adjusted expected points among legal formations.
/// Ties break toward fewer forwards, then more midfielders.
pub fn select_formation(
    squad_members: &[PlayerId],
    info: &HashMap<PlayerId, PlayerInfo>,
) -> Option<FormationChoice> {
    let mut by_position: HashMap<Position, Vec<PlayerId>> = HashMap::new();
    for &id in squad_members {
        by_position.entry(info[&id].position).or_default().push(id);
    }
    for players in by_position.values_mut() {
        players.sort_by(|a, b| {
            info[b].adjusted_xp.partial_cmp(&info[a].adjusted_xp).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    let goalkeepers = by_position.get(&Position::Gk).cloned().unwrap_or_default();
    let defenders = by_position.get(&Position::Def).cloned().unwrap_or_default();
    let midfielders = by_position.get(&Position::Mid).cloned().unwrap_or_default();
    let forwards = by_position.get(&Position::Fwd).cloned().unwrap_or_default();

    let starting_gk = *goalkeepers.first()?;

    let mut best: Option<(f64, usize, usize, FormationChoice)> = None;

    for &(def_n, mid_n, fwd_n) in &LEGAL_FORMATIONS {
        if defenders.len() < def_n || midfielders.len() < mid_n || forwards.len() < fwd_n {
            continue;
        }
        let chosen_def = &defenders[..def_n];
        let chosen_mid = &midfielders[..mid_n];
        let chosen_fwd = &forwards[..fwd_n];

        let sum: f64 = info[&starting_gk].adjusted_xp
            + chosen_def.iter().map(|id| info[id].adjusted_xp).sum::<f64>()
            + chosen_mid.iter().map(|id| info[id].adjusted_xp).sum::<f64>()
            + chosen_fwd.iter().map(|id| info[id].adjusted_xp).sum::<f64>();

        let mut starters = vec![starting_gk];
        starters.extend_from_slice(chosen_def);
        starters.extend_from_slice(chosen_mid);
        starters.extend_from_slice(chosen_fwd);

        let candidate = FormationChoice {
            goalkeeper: starting_gk,
            defenders: chosen_def.to_vec(),
            midfielders: chosen_mid.to_vec(),
            forwards: chosen_fwd.to_vec(),
        };

        // Tie-break key: fewer forwards preferred, then more midfielders.
        let better = match &best {
            None => true,
            Some((best_sum, best_fwd_n, best_mid_n, _)) => {
                sum > *best_sum
                    || (sum == *best_sum && fwd_n < *best_fwd_n)
                    || (sum == *best_sum && fwd_n == *best_fwd_n && mid_n > *best_mid_n)
            }
        };
        if better {
            best = Some((sum, fwd_n, mid_n, candidate));
        }
    }

    best.map(|(_, _, _, choice)| choice)
}

#[derive(Clone, Debug)]
pub struct FormationChoice {
    pub goalkeeper: PlayerId,
    pub defenders: Vec<PlayerId>,
    pub midfielders: Vec<PlayerId>,
    pub forwards: Vec<PlayerId>,
}

impl FormationChoice {
    pub fn starters(&self) -> Vec<PlayerId> {
        let mut out = vec![self.goalkeeper];
        out.extend(self.defenders.iter().copied());
        out.extend(self.midfielders.iter().copied());
        out.extend(self.forwards.iter().copied());
        out
    }
}

/// Orders the four bench members into slots 12-15. The non-starting
/// goalkeeper always occupies slot 12; the remaining three are ordered by
/// descending adjusted expected points.
pub fn order_bench(
    bench_members: &[PlayerId],
    info: &HashMap<PlayerId, PlayerInfo>,
) -> Vec<PlayerId> {
    let mut gk = None;
    let mut rest = Vec::new();
    for &id in bench_members {
        if info[&id].position == Position::Gk {
            gk = Some(id);
        } else {
            rest.push(id);
        }
    }
    rest.sort_by(|a, b| {
        info[b].adjusted_xp.partial_cmp(&info[a].adjusted_xp).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ordered = Vec::with_capacity(4);
    if let Some(gk) = gk {
        ordered.push(gk);
    }
    ordered.extend(rest);
    ordered
}

/// Assigns slot numbers to a full 15-player squad given a chosen starting
/// formation and bench order. Captain is the highest adjusted-xP starter;
/// vice is the next highest starter from a different club, falling back to
/// the next highest overall if every other starter shares the captain's club.
/// The captain's multiplier is 2, or 3 when `triple_captain_active`.
pub fn assign_slots_and_captaincy(
    formation: &FormationChoice,
    bench_order: &[PlayerId],
    info: &HashMap<PlayerId, PlayerInfo>,
    purchase_price: &HashMap<PlayerId, i32>,
    selling_price: &HashMap<PlayerId, i32>,
    triple_captain_active: bool,
) -> Vec<Pick> {
    let starters = formation.starters();
    let mut ranked_starters = starters.clone();
    ranked_starters.sort_by(|a, b| {
        info[b].adjusted_xp.partial_cmp(&info[a].adjusted_xp).unwrap_or(std::cmp::Ordering::Equal)
    });

    let captain = ranked_starters[0];
    let captain_club = info[&captain].club;
    let vice = ranked_starters[1..]
        .iter()
        .find(|id| info[id].club != captain_club)
        .copied()
        .unwrap_or(ranked_starters[1]);

    let captain_multiplier = if triple_captain_active { 3 } else { 2 };
    let mut picks = Vec::with_capacity(15);
    for (i, &id) in starters.iter().enumerate() {
        picks.push(Pick {
            player: id,
            slot: Slot((i + 1) as u8),
            purchase_price: purchase_price.get(&id).copied().unwrap_or(0),
            selling_price: selling_price.get(&id).copied().unwrap_or(0),
            is_captain: id == captain,
            is_vice: id == vice,
            multiplier: if id == captain { captain_multiplier } else { 1 },
        });
    }
    for (i, &id) in bench_order.iter().enumerate() {
        picks.push(Pick {
            player: id,
            slot: Slot((12 + i) as u8),
            purchase_price: purchase_price.get(&id).copied().unwrap_or(0),
            selling_price: selling_price.get(&id).copied().unwrap_or(0),
            is_captain: false,
            is_vice: false,
            multiplier: 1,
        });
    }
    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn info(position: Position, club: u32, xp: f64) -> PlayerInfo {
        PlayerInfo { position, club: ClubId(club), adjusted_xp: xp }
    }

    fn full_squad_with_xp(
        def_xp: [f64; 5],
        mid_xp: [f64; 5],
        fwd_xp: [f64; 3],
    ) -> (Vec<PlayerId>, HashMap<PlayerId, PlayerInfo>) {
        let mut map = HashMap::new();
        let mut members = Vec::new();
        let mut id = 1u32;

        map.insert(PlayerId(id), info(Position::Gk, id, 3.0));
        members.push(PlayerId(id));
        id += 1;
        map.insert(PlayerId(id), info(Position::Gk, id, 1.0));
        members.push(PlayerId(id));
        id += 1;

        for xp in def_xp {
            map.insert(PlayerId(id), info(Position::Def, id, xp));
            members.push(PlayerId(id));
            id += 1;
        }
        for xp in mid_xp {
            map.insert(PlayerId(id), info(Position::Mid, id, xp));
            members.push(PlayerId(id));
            id += 1;
        }
        for xp in fwd_xp {
            map.insert(PlayerId(id), info(Position::Fwd, id, xp));
            members.push(PlayerId(id));
            id += 1;
        }
        (members, map)
    }

    proptest! {
        #[test]
        fn chosen_starting_xi_always_has_eleven_players_with_one_goalkeeper(
            def_xp in proptest::array::uniform5(0.0f64..10.0),
            mid_xp in proptest::array::uniform5(0.0f64..10.0),
            fwd_xp in proptest::array::uniform3(0.0f64..10.0),
        ) {
            let (members, map) = full_squad_with_xp(def_xp, mid_xp, fwd_xp);
            let choice = select_formation(&members, &map).expect("a full 15-man squad always has a legal formation");
            let starters = choice.starters();
            prop_assert_eq!(starters.len(), 11);
            prop_assert_eq!(map[&choice.goalkeeper].position, Position::Gk);
        }
    }

    #[test]
    fn selects_highest_scoring_legal_formation() {
        let mut map = HashMap::new();
        map.insert(PlayerId(1), info(Position::Gk, 1, 4.0));
        map.insert(PlayerId(2), info(Position::Gk, 2, 2.0));
        for i in 3..=7 {
            map.insert(PlayerId(i), info(Position::Def, i, 4.0));
        }
        for i in 8..=12 {
            map.insert(PlayerId(i), info(Position::Mid, i, 5.0));
        }
        for i in 13..=15 {
            map.insert(PlayerId(i), info(Position::Fwd, i, 1.0));
        }

        let squad: Vec<PlayerId> = (1..=15).map(PlayerId).collect();
        let choice = select_formation(&squad, &map).unwrap();
        // Midfielders score higher than forwards here, so the optimiser
        // should prefer the 3-5-2 shape over anything fielding 3 forwards.
        assert_eq!(choice.midfielders.len(), 5);
        assert_eq!(choice.forwards.len(), 2);
    }

    #[test]
    fn bench_goalkeeper_always_slot_twelve() {
        let mut map = HashMap::new();
        map.insert(PlayerId(1), info(Position::Gk, 1, 1.0));
        map.insert(PlayerId(2), info(Position::Def, 2, 3.0));
        map.insert(PlayerId(3), info(Position::Mid, 3, 5.0));
        let ordered = order_bench(&[PlayerId(2), PlayerId(1), PlayerId(3)], &map);
        assert_eq!(ordered[0], PlayerId(1));
        assert_eq!(ordered[1], PlayerId(3));
        assert_eq!(ordered[2], PlayerId(2));
    }

    #[test]
    fn vice_prefers_different_club_from_captain() {
        let mut map = HashMap::new();
        map.insert(PlayerId(1), info(Position::Gk, 1, 1.0));
        map.insert(PlayerId(2), info(Position::Def, 9, 8.0));
        map.insert(PlayerId(3), info(Position::Mid, 9, 7.0));
        map.insert(PlayerId(4), info(Position::Fwd, 2, 6.0));

        let formation = FormationChoice {
            goalkeeper: PlayerId(1),
            defenders: vec![PlayerId(2)],
            midfielders: vec![PlayerId(3)],
            forwards: vec![PlayerId(4)],
        };
        let picks = assign_slots_and_captaincy(
            &formation,
            &[],
            &map,
            &HashMap::new(),
            &HashMap::new(),
            false,
        );
        let captain = picks.iter().find(|p| p.is_captain).unwrap();
        let vice = picks.iter().find(|p| p.is_vice).unwrap();
        assert_eq!(captain.player, PlayerId(2));
        assert_eq!(vice.player, PlayerId(4));
    }

    #[test]
    fn captain_multiplier_is_two_unless_triple_captain_is_active() {
        let mut map = HashMap::new();
        map.insert(PlayerId(1), info(Position::Gk, 1, 1.0));
        map.insert(PlayerId(2), info(Position::Def, 9, 8.0));
        map.insert(PlayerId(3), info(Position::Mid, 9, 7.0));
        map.insert(PlayerId(4), info(Position::Fwd, 2, 6.0));

        let formation = FormationChoice {
            goalkeeper: PlayerId(1),
            defenders: vec![PlayerId(2)],
            midfielders: vec![PlayerId(3)],
            forwards: vec![PlayerId(4)],
        };

        let normal = assign_slots_and_captaincy(&formation, &[], &map, &HashMap::new(), &HashMap::new(), false);
        let captain = normal.iter().find(|p| p.is_captain).unwrap();
        assert_eq!(captain.multiplier, 2);

        let tripled = assign_slots_and_captaincy(&formation, &[], &map, &HashMap::new(), &HashMap::new(), true);
        let captain = tripled.iter().find(|p| p.is_captain).unwrap();
        assert_eq!(captain.multiplier, 3);
    }
}
