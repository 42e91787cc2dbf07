use data_model::PlayerId;
use rules_engine::pricing::{MAX_BANKED_FREE_TRANSFERS, POINTS_PER_HIT};

#[derive(Clone, Debug)]
pub struct TransferTarget {
    pub player_out: PlayerId,
    pub player_in: PlayerId,
    /// Higher is more urgent to bring in.
    pub priority: u8,
    pub expected_gain: f64,
    /// The last gameweek this transfer can still be made (e.g. before a
    /// fixture swing or injury return window closes); `None` if not
    /// time-sensitive.
    pub latest_gameweek_by: Option<u8>,
}

#[derive(Clone, Debug)]
pub struct GameweekTransferBundle {
    pub gameweek: u8,
    pub transfers: Vec<PlayerId>,
    pub hit_cost: i32,
    pub expected_gain: f64,
    pub free_transfers_after: u32,
}

/// Walks the horizon gameweek by gameweek: urgent targets (deadline
/// reached) are forced through even if they cost a hit; remaining free
/// transfers are then spent on the highest-priority targets without ever
/// taking a hit for them; anything left over banks, capped at
/// [`MAX_BANKED_FREE_TRANSFERS`].
pub fn sequence_transfers(
    targets: &[TransferTarget],
    start_gameweek: u8,
    horizon_len: u8,
    starting_free_transfers: u32,
) -> Vec<GameweekTransferBundle> {
    let mut remaining: Vec<TransferTarget> = targets.to_vec();
    let mut free_transfers = starting_free_transfers;
    let mut bundles = Vec::new();

    for offset in 0..horizon_len {
        let gameweek = start_gameweek + offset;
        free_transfers = (free_transfers + 1).min(MAX_BANKED_FREE_TRANSFERS as u32);

        let mut this_gw_transfers = Vec::new();
        let mut hit_cost = 0i32;
        let mut expected_gain = 0.0;

        let urgent_indices: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, t)| t.latest_gameweek_by.is_some_and(|deadline| deadline <= gameweek))
            .map(|(i, _)| i)
            .collect();

        for &idx in urgent_indices.iter().rev() {
            let target = remaining.remove(idx);
            if free_transfers > 0 {
                free_transfers -= 1;
            } else {
                hit_cost += POINTS_PER_HIT;
            }
            expected_gain += target.expected_gain;
            this_gw_transfers.push(target.player_in);
        }

        remaining.sort_by(|a, b| b.priority.cmp(&a.priority));
        while free_transfers > 0 && !remaining.is_empty() {
            let target = remaining.remove(0);
            free_transfers -= 1;
            expected_gain += target.expected_gain;
            this_gw_transfers.push(target.player_in);
        }

        bundles.push(GameweekTransferBundle {
            gameweek,
            transfers: this_gw_transfers,
            hit_cost,
            expected_gain,
            free_transfers_after: free_transfers,
        });
    }

    bundles
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum HitVerdict {
    Take,
    WaitForFreeTransfer,
    Skip,
}

/// Classifies whether a hit is worth taking for a transfer's expected gain
/// summed over the planning horizon.
pub fn worth_hit(gain_over_horizon: f64) -> HitVerdict {
    if gain_over_horizon >= 5.0 {
        HitVerdict::Take
    } else if gain_over_horizon >= 4.0 {
        HitVerdict::WaitForFreeTransfer
    } else {
        HitVerdict::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn free_transfers_after_never_exceeds_the_cap(
            horizon_len in 1u8..38,
            starting_free_transfers in 0u32..10,
        ) {
            let bundles = sequence_transfers(&[], 1, horizon_len, starting_free_transfers);
            for bundle in &bundles {
                prop_assert!(bundle.free_transfers_after <= MAX_BANKED_FREE_TRANSFERS as u32);
            }
        }
    }

    fn target(out: u32, inn: u32, priority: u8, gain: f64, deadline: Option<u8>) -> TransferTarget {
        TransferTarget {
            player_out: PlayerId(out),
            player_in: PlayerId(inn),
            priority,
            expected_gain: gain,
            latest_gameweek_by: deadline,
        }
    }

    #[test]
    fn urgent_transfer_forced_even_without_free_transfer() {
        let targets = vec![target(1, 2, 1, 3.0, Some(10))];
        let bundles = sequence_transfers(&targets, 10, 1, 0);
        assert_eq!(bundles[0].transfers, vec![PlayerId(2)]);
        assert_eq!(bundles[0].hit_cost, POINTS_PER_HIT);
    }

    #[test]
    fn non_urgent_transfer_waits_for_a_free_transfer_never_taking_a_hit() {
        let targets = vec![target(1, 2, 5, 6.0, None)];
        let bundles = sequence_transfers(&targets, 1, 1, 0);
        // One free transfer accrues this gameweek, so it is spent without a hit.
        assert_eq!(bundles[0].transfers, vec![PlayerId(2)]);
        assert_eq!(bundles[0].hit_cost, 0);
    }

    #[test]
    fn unused_transfers_bank_up_to_the_cap() {
        let bundles = sequence_transfers(&[], 1, 6, 0);
        let last = bundles.last().unwrap();
        assert_eq!(last.free_transfers_after, MAX_BANKED_FREE_TRANSFERS as u32);
    }

    #[test]
    fn worth_hit_bands_match_thresholds() {
        assert_eq!(worth_hit(9.0), HitVerdict::Take);
        assert_eq!(worth_hit(5.0), HitVerdict::Take);
        assert_eq!(worth_hit(4.5), HitVerdict::WaitForFreeTransfer);
        assert_eq!(worth_hit(3.0), HitVerdict::Skip);
    }
}
