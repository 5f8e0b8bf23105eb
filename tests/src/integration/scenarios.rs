//! # Reference Scenarios
//!
//! The three concrete walkthroughs every Kale-Chain build must reproduce.

#[cfg(test)]
mod tests {
    use crate::fixtures::{addr, ctx, Harness};
    use kc_01_params::ModuleParams;
    use kc_02_supply::TOTAL_SUPPLY;
    use kc_04_trader_profiles::SocialParams;
    use rust_decimal::Decimal;

    #[test]
    fn test_initialize_credits_whole_supply() {
        let mut h = Harness::new();
        let recipient = addr("kale1recipient");
        let mut ctx = ctx(&mut h.store);

        h.supply.initialize(&mut ctx, recipient.as_str()).unwrap();

        assert_eq!(TOTAL_SUPPLY, 100_000_000_000_000);
        assert_eq!(h.supply.balance(&recipient).unwrap().amount, TOTAL_SUPPLY);
        assert_eq!(h.supply.total_supply().unwrap().amount, TOTAL_SUPPLY);
    }

    #[test]
    fn test_sequential_trade_ids() {
        let mut h = Harness::new();
        let trader = addr("kale1abc");
        let mut ctx = ctx(&mut h.store);

        let first = h.ledger.record_trade(&mut ctx, &trader, 1_000_000).unwrap();
        let second = h.ledger.record_trade(&mut ctx, &trader, 1_000_000).unwrap();

        assert_eq!(first.value.id, "1");
        assert_eq!(second.value.id, "2");
        assert_eq!(h.ledger.get_trade(&ctx, "1").unwrap().trader, trader);
    }

    #[test]
    fn test_fee_shares_over_budget_rejected() {
        let params = SocialParams {
            trader_fee_percentage: Decimal::new(10, 2),
            treasury_fee_percentage: Decimal::new(95, 2),
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.field, "trader_fee_percentage + treasury_fee_percentage");
    }
}
