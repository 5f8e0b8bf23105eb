//! # Genesis Integration
//!
//! Export, reset, import: the state that comes back must be the state that
//! went out.

#[cfg(test)]
mod tests {
    use crate::fixtures::{addr, ctx, random_address, seeded_rng, Harness};
    use kc_02_supply::{BankParams, InMemoryBank, SupplyError, TOTAL_SUPPLY};
    use kc_03_trade_ledger::{PageRequest, TradingParams};
    use kc_04_trader_profiles::SocialParams;
    use kc_05_genesis::{default_genesis, GenesisConfig, GenesisError, GenesisSnapshot};
    use rand::rngs::StdRng;
    use rand::Rng;
    use rust_decimal::Decimal;
    use shared_types::{Address, Classify, ErrorKind};

    /// Random trades, follows and stakes on top of non-default params.
    fn populate(h: &mut Harness, rng: &mut StdRng) -> Vec<Address> {
        let traders: Vec<Address> = (0..5).map(|_| random_address(rng)).collect();
        let mut ctx = ctx(&mut h.store);

        h.ledger
            .params()
            .set(
                &mut ctx,
                TradingParams {
                    fee_rate: Decimal::new(25, 4),
                    min_trade_amount: "5000".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        h.supply
            .params()
            .set(
                &mut ctx,
                BankParams {
                    minting_cap: "500000000".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        h.profiles
            .params()
            .set(
                &mut ctx,
                SocialParams {
                    trader_fee_percentage: Decimal::new(15, 2),
                    ..Default::default()
                },
            )
            .unwrap();

        for _ in 0..rng.gen_range(20..60) {
            let trader = &traders[rng.gen_range(0..traders.len())];
            let amount = rng.gen_range(5_000u128..=1_000_000_000);
            let profit = rng.gen_range(-1_000_000i128..=1_000_000);
            h.ledger
                .record_trade_with_profit(&mut ctx, trader, amount, profit)
                .unwrap();
        }
        for _ in 0..10 {
            let follower = &traders[rng.gen_range(0..traders.len())];
            let trader = &traders[rng.gen_range(0..traders.len())];
            // self-follows and repeats are rejected; that is fine here
            let _ = h.profiles.follow(&mut ctx, follower, trader);
        }
        let staker = &traders[0];
        h.profiles.stake(&mut ctx, staker, 2_000_000).unwrap();
        traders
    }

    #[test]
    fn test_export_reset_import_round_trip() {
        let mut rng = seeded_rng(0x5EED_0006);

        for _ in 0..10 {
            let mut source = Harness::new();
            populate(&mut source, &mut rng);
            let exported = source.genesis.export_genesis(&ctx(&mut source.store)).unwrap();
            let json = exported.to_json_pretty().unwrap();

            let mut target = Harness::new();
            let snapshot = GenesisSnapshot::from_json(&json).unwrap();
            target
                .genesis
                .init_genesis(&mut ctx(&mut target.store), snapshot)
                .unwrap();

            let reexported = target.genesis.export_genesis(&ctx(&mut target.store)).unwrap();
            assert_eq!(reexported.trading, exported.trading);
            assert_eq!(reexported.social, exported.social);
            assert_eq!(reexported.supply, exported.supply);
            assert_eq!(target.store.dump(), source.store.dump());
        }
    }

    #[test]
    fn test_rebuilt_profiles_match_recorded_ones() {
        let mut rng = seeded_rng(0x5EED_0007);
        let mut source = Harness::new();
        let traders = populate(&mut source, &mut rng);

        let mut exported = source.genesis.export_genesis(&ctx(&mut source.store)).unwrap();
        exported.social.profiles = None;

        let mut target = Harness::new();
        target
            .genesis
            .init_genesis(&mut ctx(&mut target.store), exported)
            .unwrap();

        let source_ctx = ctx(&mut source.store);
        let target_ctx = ctx(&mut target.store);
        for trader in &traders {
            let original = source.profiles.get_profile(&source_ctx, trader);
            let rebuilt = target.profiles.get_profile(&target_ctx, trader);
            // follows and stakes are not part of trade history
            assert_eq!(rebuilt.total_trades, original.total_trades);
            assert_eq!(rebuilt.profitable_trades, original.profitable_trades);
            assert_eq!(rebuilt.total_profit, original.total_profit);
            assert_eq!(rebuilt.success_rate, original.success_rate);
        }
    }

    #[test]
    fn test_import_continues_id_allocation() {
        let mut rng = seeded_rng(0x5EED_0008);
        let mut source = Harness::new();
        populate(&mut source, &mut rng);
        let exported = source.genesis.export_genesis(&ctx(&mut source.store)).unwrap();
        let counter = exported.trading.trade_counter;

        let mut target = Harness::new();
        let mut ctx = ctx(&mut target.store);
        target.genesis.init_genesis(&mut ctx, exported).unwrap();

        let next = target
            .ledger
            .record_trade(&mut ctx, &addr("kale1newcomer"), 50_000)
            .unwrap();
        assert_eq!(next.value.id, (counter + 1).to_string());

        let page = target
            .ledger
            .list_all_trades(&ctx, &PageRequest::first(1000))
            .unwrap();
        assert_eq!(page.trades.len() as u64, counter + 1);
    }

    #[test]
    fn test_rejected_import_leaves_store_untouched() {
        let mut rng = seeded_rng(0x5EED_0009);
        let mut h = Harness::new();
        populate(&mut h, &mut rng);
        let before = h.store.dump();

        let mut broken = h.genesis.export_genesis(&ctx(&mut h.store)).unwrap();
        // Importing a state onto itself clashes with the counter.
        let err = h
            .genesis
            .init_genesis(&mut ctx(&mut h.store), broken.clone())
            .unwrap_err();
        assert!(matches!(err, GenesisError::CounterMismatch { .. }));
        assert_eq!(h.store.dump(), before);

        // A bad event deep in the history is caught before the params write.
        let mut fresh = Harness::new();
        let last = broken.trading.trade_events.len() - 1;
        broken.trading.trade_events[last].id = "0x10".into();
        let err = fresh
            .genesis
            .init_genesis(&mut ctx(&mut fresh.store), broken)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(fresh.store.is_empty());
    }

    #[test]
    fn test_supply_survives_round_trip_as_flag_only() {
        let mut source = Harness::new();
        let mut snapshot = default_genesis();
        snapshot.supply.initial_supply_recipient = Some("kale1founder".into());
        source
            .genesis
            .init_genesis(&mut ctx(&mut source.store), snapshot)
            .unwrap();

        let exported = source.genesis.export_genesis(&ctx(&mut source.store)).unwrap();
        assert!(exported.supply.supply_initialized);
        assert!(exported.supply.initial_supply_recipient.is_none());

        // The export carries no recipient, so importing it mints nothing.
        let mut target = Harness::with_genesis_config(GenesisConfig::default());
        target
            .genesis
            .init_genesis(&mut ctx(&mut target.store), exported)
            .unwrap();
        assert_eq!(target.supply.total_supply().unwrap().amount, 0);
        assert_eq!(
            source.supply.balance(&addr("kale1founder")).unwrap().amount,
            TOTAL_SUPPLY
        );
    }

    #[test]
    fn test_supply_stage_rejection_writes_nothing() {
        let mut rng = seeded_rng(0x5EED_000A);
        let mut source = Harness::new();
        populate(&mut source, &mut rng);
        let mut exported = source.genesis.export_genesis(&ctx(&mut source.store)).unwrap();
        assert!(!exported.trading.trade_events.is_empty());
        exported.supply.initial_supply_recipient = Some("kale1founder".into());

        let mut disabled = exported.clone();
        disabled.supply.params.enable_minting = false;
        let mut capped = exported.clone();
        capped.supply.params.minting_cap = "50000000".into();

        let cases = [
            (Harness::new(), disabled, ErrorKind::Disabled),
            (Harness::new(), capped, ErrorKind::Validation),
            (
                Harness::with_bank(InMemoryBank::empty()),
                exported,
                ErrorKind::Capability,
            ),
        ];
        for (mut target, snapshot, kind) in cases {
            let err = target
                .genesis
                .init_genesis(&mut ctx(&mut target.store), snapshot)
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    GenesisError::Supply(
                        SupplyError::MintingDisabled
                            | SupplyError::MintingCapExceeded { .. }
                            | SupplyError::ModuleAccountMissing { .. }
                    )
                ),
                "unexpected error: {:?}",
                err
            );
            assert_eq!(err.kind(), kind);
            assert!(target.store.is_empty());
            assert_eq!(target.supply.total_supply().unwrap().amount, 0);
        }
    }
}
