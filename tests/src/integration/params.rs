//! # Params Integration
//!
//! `set` then `get` round-trips for every module's params record.

#[cfg(test)]
mod tests {
    use crate::fixtures::{ctx, seeded_rng, Harness};
    use kc_01_params::{ModuleParams, ParamsError};
    use kc_02_supply::BankParams;
    use kc_03_trade_ledger::TradingParams;
    use kc_04_trader_profiles::{SocialParams, STAKE_DENOM};
    use rand::rngs::StdRng;
    use rand::Rng;
    use rust_decimal::Decimal;
    use shared_types::Coin;

    fn random_trading(rng: &mut StdRng) -> TradingParams {
        let min = rng.gen_range(0u128..1_000_000);
        let max = rng.gen_range(min..=u128::from(u64::MAX));
        TradingParams {
            min_trade_amount: min.to_string(),
            max_trade_amount: max.to_string(),
            trade_enabled: rng.gen_bool(0.5),
            fee_rate: Decimal::new(rng.gen_range(0..=10_000), 4),
            price_precision: rng.gen_range(1..=18),
            amount_precision: rng.gen_range(1..=18),
        }
    }

    fn random_social(rng: &mut StdRng) -> SocialParams {
        let trader = rng.gen_range(0..=100i64);
        let treasury = rng.gen_range(0..=100 - trader);
        SocialParams {
            trader_fee_percentage: Decimal::new(trader, 2),
            treasury_fee_percentage: Decimal::new(treasury, 2),
            minimum_stake_amount: Coin::new(STAKE_DENOM, rng.gen_range(0..10_000_000)),
            enable_social_bonus: rng.gen_bool(0.5),
            social_bonus_multiplier: Decimal::new(rng.gen_range(0..=1_000), 3),
        }
    }

    fn random_bank(rng: &mut StdRng) -> BankParams {
        BankParams {
            enable_minting: rng.gen_bool(0.5),
            minting_cap: rng.gen_range(0u64..=u64::MAX).to_string(),
        }
    }

    #[test]
    fn test_set_then_get_returns_value() {
        let mut rng = seeded_rng(0x5EED_0005);
        let mut h = Harness::new();
        let mut ctx = ctx(&mut h.store);

        for _ in 0..100 {
            let trading = random_trading(&mut rng);
            let social = random_social(&mut rng);
            let bank = random_bank(&mut rng);
            assert!(trading.validate().is_ok());
            assert!(social.validate().is_ok());
            assert!(bank.validate().is_ok());

            h.ledger.params().set(&mut ctx, trading.clone()).unwrap();
            h.profiles.params().set(&mut ctx, social.clone()).unwrap();
            h.supply.params().set(&mut ctx, bank.clone()).unwrap();

            assert_eq!(h.ledger.params().get(&ctx), trading);
            assert_eq!(h.profiles.params().get(&ctx), social);
            assert_eq!(h.supply.params().get(&ctx), bank);
        }
    }

    #[test]
    fn test_rejected_set_keeps_previous_value() {
        let mut h = Harness::new();
        let mut ctx = ctx(&mut h.store);
        let valid = TradingParams {
            fee_rate: Decimal::new(5, 3),
            ..Default::default()
        };
        h.ledger.params().set(&mut ctx, valid.clone()).unwrap();

        let invalid = [
            TradingParams {
                min_trade_amount: "10".into(),
                max_trade_amount: "9".into(),
                ..Default::default()
            },
            TradingParams {
                fee_rate: Decimal::new(11, 1),
                ..Default::default()
            },
            TradingParams {
                amount_precision: 19,
                ..Default::default()
            },
            TradingParams {
                max_trade_amount: "-1".into(),
                ..Default::default()
            },
        ];
        for params in invalid {
            let err = h.ledger.params().set(&mut ctx, params).unwrap_err();
            assert!(matches!(err, ParamsError::Invalid { module: "kalefi", .. }));
            assert_eq!(h.ledger.params().get(&ctx), valid);
        }
    }

    #[test]
    fn test_unset_params_read_as_defaults() {
        let mut h = Harness::new();
        let ctx = ctx(&mut h.store);
        assert_eq!(h.ledger.params().get(&ctx), TradingParams::default());
        assert_eq!(h.profiles.params().get(&ctx), SocialParams::default());
        assert_eq!(h.supply.params().get(&ctx), BankParams::default());
    }
}
