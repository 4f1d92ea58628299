use offercomp_calc::factors::pf;
use offercomp_calc::OfferCalculator;
use offercomp_core::compensation::VestingEntry;
use offercomp_core::{CurrentCompensation, OfferSpec, VestingMode, VestingSchedule};
use proptest::prelude::*;

fn arb_amount() -> impl Strategy<Value = f64> {
    0.0f64..10_000_000.0
}

fn arb_offer() -> impl Strategy<Value = OfferSpec> {
    (
        (arb_amount(), 0.0f64..50.0, arb_amount(), arb_amount()),
        (0.0f64..500_000.0, 1.0f64..150.0, 0u32..=10),
        (any::<bool>(), 0.0f64..30.0),
    )
        .prop_map(
            |(
                (base_salary, bonus_pct, joining_bonus, relocation_bonus),
                (stock_grant_value, exchange_rate, vesting_years),
                (pf_included_in_base, employer_pf_percentage),
            )| OfferSpec {
                base_salary,
                performance_bonus_percentage: bonus_pct,
                joining_bonus,
                relocation_bonus,
                stock_grant_value,
                exchange_rate,
                vesting_years,
                vesting_mode: VestingMode::Equal,
                pf_included_in_base,
                employer_pf_percentage,
            },
        )
}

fn arb_current() -> impl Strategy<Value = CurrentCompensation> {
    (arb_amount(), arb_amount()).prop_map(|(b, v)| CurrentCompensation::new(b, v))
}

fn arb_schedule() -> impl Strategy<Value = Vec<(u32, f64)>> {
    proptest::collection::btree_map(1u32..=12, 0.0f64..60.0, 0..8)
        .prop_map(|m| m.into_iter().collect())
}

// ── Breakdown shape ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn breakdown_length_equals_vesting_years(offer in arb_offer(), current in arb_current()) {
        let projection = OfferCalculator::new().project(&offer, &current);
        prop_assert_eq!(projection.yearly_breakdown.len(), offer.vesting_years as usize);
    }

    #[test]
    fn one_time_only_in_first_year(offer in arb_offer(), current in arb_current()) {
        let projection = OfferCalculator::new().project(&offer, &current);
        for row in &projection.yearly_breakdown {
            if row.year == 1 {
                prop_assert_eq!(row.one_time, offer.joining_bonus + offer.relocation_bonus);
            } else {
                prop_assert_eq!(row.one_time, 0.0);
            }
        }
    }

    #[test]
    fn with_pf_never_below_without_pf(offer in arb_offer(), current in arb_current()) {
        let projection = OfferCalculator::new().project(&offer, &current);
        for row in &projection.yearly_breakdown {
            prop_assert!(row.total_with_pf + 1e-6 >= row.total_without_pf);
        }
    }
}

// ── Vesting ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn equal_vesting_is_always_valid(offer in arb_offer(), current in arb_current()) {
        prop_assume!(offer.vesting_years > 0);
        let projection = OfferCalculator::new().project(&offer, &current);
        let expected = 100.0 / offer.vesting_years as f64;

        for row in &projection.yearly_breakdown {
            prop_assert!((row.stock_percentage - expected).abs() < 1e-9);
        }
        prop_assert!((projection.vesting_total_percentage - 100.0).abs() < 1e-9);
        prop_assert!(projection.vesting_is_valid);
    }

    #[test]
    fn custom_validity_tracks_in_period_sum(
        offer in arb_offer(),
        current in arb_current(),
        cells in arb_schedule(),
    ) {
        let schedule = VestingSchedule::new(
            cells.iter().map(|&(year, pct)| VestingEntry::new(year, pct)),
        ).unwrap();
        let in_period: f64 = cells
            .iter()
            .filter(|(year, _)| *year <= offer.vesting_years)
            .map(|(_, pct)| pct)
            .sum();
        let offer = OfferSpec { vesting_mode: VestingMode::custom(schedule), ..offer };

        let projection = OfferCalculator::new().project(&offer, &current);
        prop_assert!((projection.vesting_total_percentage - in_period).abs() < 1e-9);
        prop_assert_eq!(projection.vesting_is_valid, (in_period - 100.0).abs() < 0.01);
    }

    #[test]
    fn stocks_scale_with_vesting_share(offer in arb_offer(), current in arb_current()) {
        let projection = OfferCalculator::new().project(&offer, &current);
        for row in &projection.yearly_breakdown {
            let expected = projection.stock_value_local * row.stock_percentage / 100.0;
            prop_assert!((row.stocks - expected).abs() <= 1e-6 * expected.max(1.0));
        }
    }
}

// ── PF and hike ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn pf_modes_round_trip(
        base in 1.0f64..10_000_000.0,
        pf_pct in 0.0f64..30.0,
        offer in arb_offer(),
        current in arb_current(),
    ) {
        let embedded = OfferSpec {
            base_salary: base,
            performance_bonus_percentage: 0.0,
            pf_included_in_base: true,
            employer_pf_percentage: pf_pct,
            ..offer.clone()
        };
        let additive = OfferSpec {
            base_salary: pf::basic_from_inclusive(base, pf_pct),
            pf_included_in_base: false,
            ..embedded.clone()
        };

        let calc = OfferCalculator::new();
        let a = calc.project(&embedded, &current);
        let b = calc.project(&additive, &current);
        for (x, y) in a.yearly_breakdown.iter().zip(&b.yearly_breakdown) {
            prop_assert!(
                (x.total_with_pf - y.total_with_pf).abs() <= 1e-6 * x.total_with_pf.max(1.0)
            );
        }
    }

    #[test]
    fn zero_current_means_zero_hike(offer in arb_offer()) {
        let projection = OfferCalculator::new().project(&offer, &CurrentCompensation::default());
        prop_assert_eq!(projection.hike_percentage, 0.0);
    }

    #[test]
    fn hike_sign_follows_first_year_total(offer in arb_offer(), current in arb_current()) {
        prop_assume!(current.total() > 0.0);
        let projection = OfferCalculator::new().project(&offer, &current);
        let diff = projection.first_year.total_with_pf - current.total();
        if diff > 0.0 {
            prop_assert!(projection.hike_percentage > 0.0);
        } else if diff < 0.0 {
            prop_assert!(projection.hike_percentage < 0.0);
        }
    }
}
