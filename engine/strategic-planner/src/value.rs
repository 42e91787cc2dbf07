use data_model::PlayerId;

/// Rise/fall probabilities at or above this threshold are treated as
/// actionable; below it they're noise from the external price model.
pub const PRICE_MOVE_ACTION_THRESHOLD: f64 = 0.6;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ValueAction {
    BuyEarly,
    SellEarly,
    Hold,
}

#[derive(Clone, Debug)]
pub struct ValueOutlook {
    pub player: PlayerId,
    pub unrealised_profit: i32,
    pub rise_probability: Option<f64>,
    pub fall_probability: Option<f64>,
    pub action: ValueAction,
}

/// Builds a value outlook for a held or targeted player. Rise/fall
/// probabilities come from an external price-change model the core does
/// not implement; `None` simply yields `Hold`.
pub fn assess_value(
    player: PlayerId,
    purchase_price: i32,
    selling_price: i32,
    rise_probability: Option<f64>,
    fall_probability: Option<f64>,
) -> ValueOutlook {
    let action = match (rise_probability, fall_probability) {
        (Some(r), _) if r >= PRICE_MOVE_ACTION_THRESHOLD => ValueAction::BuyEarly,
        (_, Some(f)) if f >= PRICE_MOVE_ACTION_THRESHOLD => ValueAction::SellEarly,
        _ => ValueAction::Hold,
    };

    ValueOutlook {
        player,
        unrealised_profit: selling_price - purchase_price,
        rise_probability,
        fall_probability,
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_rise_probability_recommends_buying_early() {
        let outlook = assess_value(PlayerId(1), 70, 70, Some(0.7), None);
        assert_eq!(outlook.action, ValueAction::BuyEarly);
    }

    #[test]
    fn high_fall_probability_recommends_selling_early() {
        let outlook = assess_value(PlayerId(1), 70, 70, None, Some(0.8));
        assert_eq!(outlook.action, ValueAction::SellEarly);
    }

    #[test]
    fn unrealised_profit_reflects_selling_price_gap() {
        let outlook = assess_value(PlayerId(1), 70, 75, None, None);
        assert_eq!(outlook.unrealised_profit, 5);
        assert_eq!(outlook.action, ValueAction::Hold);
    }
}
