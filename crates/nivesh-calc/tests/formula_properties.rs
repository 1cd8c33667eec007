//! Property tests across the whole formula library.

use nivesh_calc::prelude::*;
use nivesh_calc::NSC_TENURE_YEARS;
use nivesh_core::types::{CompoundingFrequency, NscFrequency};
use proptest::prelude::*;

fn frequency() -> impl Strategy<Value = CompoundingFrequency> {
    prop::sample::select(CompoundingFrequency::ALL.to_vec())
}

proptest! {
    #[test]
    fn zero_amount_yields_zero_gain(rate in 0.0f64..50.0, years in 0.0f64..40.0) {
        let sip = compute_sip(0.0, rate, years);
        prop_assert_eq!(sip.gain, 0.0);
        prop_assert_eq!(sip.total_invested, 0.0);

        let lumpsum = compute_lumpsum(0.0, rate, years);
        prop_assert_eq!(lumpsum.gain, 0.0);
        prop_assert_eq!(lumpsum.total_invested, 0.0);

        let ci = compute_compound_interest(0.0, rate, years, CompoundingFrequency::Quarterly);
        prop_assert_eq!(ci.estimated_returns, 0.0);
        prop_assert_eq!(ci.invested_amount, 0.0);

        let nsc = compute_nsc(0.0, rate, NSC_TENURE_YEARS, NscFrequency::HalfYearly);
        prop_assert_eq!(nsc.total_interest, 0.0);
        prop_assert_eq!(nsc.invested_amount, 0.0);

        let ppf = compute_ppf(0.0, years, rate);
        prop_assert_eq!(ppf.total_interest, 0.0);
        prop_assert_eq!(ppf.invested_amount, 0.0);

        let nps = compute_nps(0.0, rate, 30.0, 30.0 + years);
        prop_assert_eq!(nps.interest_earned, 0.0);
        prop_assert_eq!(nps.total_investment, 0.0);

        let gratuity = compute_gratuity(0.0, years);
        prop_assert_eq!(gratuity.gratuity_capped, 0.0);

        let swp = compute_swp(0.0, 0.0, rate, years);
        prop_assert_eq!(swp.invested_amount, 0.0);
        prop_assert_eq!(swp.final_value, 0.0);
    }

    #[test]
    fn results_are_finite(
        amount in 0.0f64..1.0e7,
        rate in 0.0f64..50.0,
        years in 0.0f64..40.0,
        freq in frequency(),
    ) {
        let sip = compute_sip(amount, rate, years);
        prop_assert!(sip.maturity.is_finite() && sip.gain.is_finite());
        prop_assert!(sip.gain >= -1e-6 * sip.total_invested.max(1.0));

        let ci = compute_compound_interest(amount, rate, years, freq);
        prop_assert!(ci.total_amount.is_finite());
        prop_assert!(ci.total_amount >= ci.invested_amount);

        let ppf = compute_ppf(amount, years, rate);
        prop_assert!(ppf.maturity_value.is_finite());

        let swp = compute_swp(amount, amount / 100.0, rate, years.min(30.0));
        prop_assert!(swp.final_value.is_finite());
    }

    #[test]
    fn gratuity_never_exceeds_cap(salary in 0.0f64..1.0e7, years in 0.0f64..60.0) {
        let g = compute_gratuity(salary, years);
        prop_assert!(g.gratuity_capped <= g.cap);
        prop_assert_eq!(g.capped, g.gratuity_raw > g.cap);
    }

    #[test]
    fn swp_is_bit_identical(
        investment in 0.0f64..1.0e7,
        withdrawal in 0.0f64..1.0e5,
        rate in 0.0f64..30.0,
        years in 0.0f64..30.0,
    ) {
        let a = compute_swp(investment, withdrawal, rate, years);
        let b = compute_swp(investment, withdrawal, rate, years);
        prop_assert_eq!(a.final_value.to_bits(), b.final_value.to_bits());
        prop_assert_eq!(a.total_withdrawal.to_bits(), b.total_withdrawal.to_bits());
    }
}

#[test]
fn results_serialize_with_field_names() {
    let json = serde_json::to_value(compute_gratuity(60_000.0, 20.0)).unwrap();
    assert_eq!(json["gratuity_capped"], 692_308.0);
    assert_eq!(json["capped"], false);

    let json = serde_json::to_value(compute_sip(25_000.0, 12.0, 10.0)).unwrap();
    assert_eq!(json["months"], 120);
}
