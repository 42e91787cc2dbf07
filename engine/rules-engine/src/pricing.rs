//! Selling-price, transfer-cost and free-transfer arithmetic.
//!
//! All money is integer tenths-of-a-million, matching `Player::now_cost`.
//! Division always rounds toward zero (integer division), matching the
//! official FPL selling-price rule exactly.

pub const POINTS_PER_HIT: i32 = 4;
pub const MAX_BANKED_FREE_TRANSFERS: u32 = 5;
pub const BASE_FREE_TRANSFERS_PER_GAMEWEEK: u32 = 1;

/// Selling price for a player bought at `purchase_price` whose current
/// market price is `now_cost`. Half of any profit is kept by the platform,
/// rounded down to the nearest 0.1; price drops are passed through in full.
pub fn selling_price(purchase_price: i32, now_cost: i32) -> i32 {
    if now_cost <= purchase_price {
        return now_cost;
    }
    let profit = now_cost - purchase_price;
    purchase_price + profit / 2
}

/// Points cost of making `transfers_made` transfers this gameweek given
/// `free_transfers` currently banked.
pub fn transfer_cost(transfers_made: u32, free_transfers: u32) -> i32 {
    let paid = transfers_made.saturating_sub(free_transfers);
    paid as i32 * POINTS_PER_HIT
}

/// A configured special-event free-transfer top-up, e.g. an AFCON-driven
/// boost for clubs with call-ups. `trigger_after_gw` records the gameweek
/// after which the triggering event was confirmed (the call-up list, an
/// international break); the top-up itself fires once, at
/// `effective_from_gw`, setting the bank to `max(current, topup_to)`.
/// `carry_over` controls whether that set-to-max value is allowed to sit
/// above the normal cap going forward, or is immediately reclamped to it.
#[derive(Copy, Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct FreeTransferTopup {
    pub trigger_after_gw: u8,
    pub effective_from_gw: u8,
    pub topup_to: u32,
    pub carry_over: bool,
}

/// Rolls `previous_banked` free transfers into next gameweek's count: one
/// transfer accrues per gameweek, a wildcard or free hit played this
/// gameweek does not consume the bank, and the total is capped. At
/// `topup.effective_from_gw`, the accrued value is raised to
/// `max(accrued, topup.topup_to)` rather than added to.
pub fn accrue_free_transfers(
    previous_banked: u32,
    transfers_made_this_gameweek: u32,
    chip_active: bool,
    topup: Option<FreeTransferTopup>,
    gameweek: u8,
) -> u32 {
    let consumed = if chip_active { 0 } else { transfers_made_this_gameweek };
    let remaining = previous_banked.saturating_sub(consumed);
    let accrued = (remaining + BASE_FREE_TRANSFERS_PER_GAMEWEEK).min(MAX_BANKED_FREE_TRANSFERS);

    match topup.filter(|t| t.effective_from_gw == gameweek) {
        Some(t) => {
            let boosted = accrued.max(t.topup_to);
            if t.carry_over { boosted } else { boosted.min(MAX_BANKED_FREE_TRANSFERS) }
        }
        None => accrued,
    }
}
