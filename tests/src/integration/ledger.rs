//! # Trade Ledger Integration
//!
//! Admission, id allocation and the trader index, exercised with randomized
//! trade streams.

#[cfg(test)]
mod tests {
    use crate::fixtures::{addr, ctx, random_address, seeded_rng, Harness};
    use kc_03_trade_ledger::{LedgerError, PageRequest, TradeEvent, TradingParams};
    use rand::Rng;
    use shared_types::{Address, Classify, ErrorKind};
    use std::collections::BTreeMap;

    // =========================================================================
    // ADMISSION
    // =========================================================================

    #[test]
    fn test_admission_iff_enabled_and_in_bounds() {
        let mut rng = seeded_rng(0x5EED_0002);
        let mut h = Harness::new();
        let trader = addr("kale1abc");
        let (min, max) = (10_000u128, 1_000_000_000u128);
        let mut expected_counter = 0u64;

        for round in 0..300 {
            let enabled = rng.gen_bool(0.8);
            let amount = match rng.gen_range(0..6) {
                0 => min,
                1 => max,
                2 => min - 1,
                3 => max + 1,
                4 => rng.gen_range(0..min),
                _ => rng.gen_range(min..=max.saturating_mul(2)),
            };

            let mut ctx = ctx(&mut h.store);
            h.ledger
                .params()
                .set(
                    &mut ctx,
                    TradingParams {
                        trade_enabled: enabled,
                        ..Default::default()
                    },
                )
                .unwrap();
            drop(ctx);

            let before = h.store.dump();
            let mut ctx = crate::fixtures::ctx(&mut h.store);
            let result = h.ledger.record_trade(&mut ctx, &trader, amount);
            let admissible = enabled && (min..=max).contains(&amount);

            match result {
                Ok(emitted) => {
                    assert!(admissible, "round {}: admitted {} (enabled={})", round, amount, enabled);
                    expected_counter += 1;
                    assert_eq!(emitted.value.id, expected_counter.to_string());
                }
                Err(err) => {
                    assert!(!admissible, "round {}: rejected {} ({})", round, amount, err);
                    let kind = if enabled {
                        ErrorKind::Validation
                    } else {
                        ErrorKind::Disabled
                    };
                    assert_eq!(err.kind(), kind);
                    drop(ctx);
                    assert_eq!(h.store.dump(), before, "round {}: store changed", round);
                }
            }
        }

        let ctx = crate::fixtures::ctx(&mut h.store);
        assert_eq!(h.ledger.trade_counter(&ctx).unwrap(), expected_counter);
    }

    #[test]
    fn test_disabled_check_precedes_bounds() {
        let mut h = Harness::new();
        let mut ctx = ctx(&mut h.store);
        h.ledger
            .params()
            .set(
                &mut ctx,
                TradingParams {
                    trade_enabled: false,
                    ..Default::default()
                },
            )
            .unwrap();

        let err = h.ledger.record_trade(&mut ctx, &addr("kale1abc"), 1).unwrap_err();
        assert_eq!(err, LedgerError::TradingDisabled);
    }

    // =========================================================================
    // TRADER INDEX
    // =========================================================================

    #[test]
    fn test_trader_listing_under_random_interleaving() {
        let mut rng = seeded_rng(0x5EED_0003);
        let mut h = Harness::new();
        let traders: Vec<Address> = (0..6).map(|_| random_address(&mut rng)).collect();
        let mut expected: BTreeMap<Address, Vec<String>> = BTreeMap::new();

        let mut ctx = ctx(&mut h.store);
        for _ in 0..200 {
            let trader = &traders[rng.gen_range(0..traders.len())];
            let amount = rng.gen_range(10_000u128..=1_000_000_000);
            let event = h.ledger.record_trade(&mut ctx, trader, amount).unwrap().value;
            expected.entry(trader.clone()).or_default().push(event.id);
        }

        for trader in &traders {
            let listed: Vec<String> = h
                .ledger
                .list_trades_by_trader(&ctx, trader)
                .unwrap()
                .into_iter()
                .inspect(|e| assert_eq!(&e.trader, trader))
                .map(|e| e.id)
                .collect();
            let want = expected.get(trader).cloned().unwrap_or_default();
            assert_eq!(listed, want, "listing for {}", trader);
        }
    }

    #[test]
    fn test_prefix_sharing_traders_do_not_mix() {
        let mut h = Harness::new();
        let short = addr("kale1ab");
        let long = addr("kale1abc");
        let mut ctx = ctx(&mut h.store);

        h.ledger.record_trade(&mut ctx, &long, 50_000).unwrap();
        h.ledger.record_trade(&mut ctx, &short, 50_000).unwrap();
        h.ledger.record_trade(&mut ctx, &long, 50_000).unwrap();

        let ids = |t: &Address| -> Vec<String> {
            h.ledger
                .list_trades_by_trader(&ctx, t)
                .unwrap()
                .into_iter()
                .map(|e| e.id)
                .collect()
        };
        assert_eq!(ids(&short), vec!["2"]);
        assert_eq!(ids(&long), vec!["1", "3"]);
    }

    #[test]
    fn test_unknown_trader_lists_nothing() {
        let mut h = Harness::new();
        let ctx = ctx(&mut h.store);
        assert!(h
            .ledger
            .list_trades_by_trader(&ctx, &addr("kale1nobody"))
            .unwrap()
            .is_empty());
    }

    // =========================================================================
    // PAGINATION
    // =========================================================================

    #[test]
    fn test_paging_visits_every_trade_once() {
        let mut rng = seeded_rng(0x5EED_0004);
        let mut h = Harness::new();
        let mut ctx = ctx(&mut h.store);
        for _ in 0..37 {
            let trader = random_address(&mut rng);
            h.ledger.record_trade(&mut ctx, &trader, 25_000).unwrap();
        }

        for limit in [1usize, 5, 10, 36, 37, 100] {
            let mut seen: Vec<TradeEvent> = Vec::new();
            let mut request = PageRequest::first(limit);
            loop {
                let page = h.ledger.list_all_trades(&ctx, &request).unwrap();
                assert!(page.trades.len() <= limit);
                seen.extend(page.trades);
                match page.next_cursor {
                    Some(cursor) => request = PageRequest::after(cursor, limit),
                    None => break,
                }
            }
            let ids: Vec<String> = seen.into_iter().map(|e| e.id).collect();
            let want: Vec<String> = (1..=37).map(|i: u64| i.to_string()).collect();
            assert_eq!(ids, want, "limit {}", limit);
        }
    }

    #[test]
    fn test_garbage_cursor_rejected() {
        let mut h = Harness::new();
        let ctx = ctx(&mut h.store);
        let err = h
            .ledger
            .list_all_trades(&ctx, &PageRequest::after("not-hex", 10))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCursor { .. }));
    }

    // =========================================================================
    // PROFILE OBSERVER
    // =========================================================================

    #[test]
    fn test_profiles_follow_recorded_trades() {
        let mut h = Harness::new();
        let trader = addr("kale1abc");
        let mut ctx = ctx(&mut h.store);

        let emitted = h
            .ledger
            .record_trade_with_profit(&mut ctx, &trader, 50_000, 120)
            .unwrap();
        assert!(emitted
            .events
            .iter()
            .any(|e| e.event_type() == "profile_created"));
        h.ledger
            .record_trade_with_profit(&mut ctx, &trader, 50_000, -20)
            .unwrap();

        let profile = h.profiles.get_profile(&ctx, &trader);
        assert_eq!(profile.total_trades, 2);
        assert_eq!(profile.profitable_trades, 1);
        assert_eq!(profile.total_profit, 100);
        assert_eq!(profile.success_rate.to_string(), "0.5");
    }
}
