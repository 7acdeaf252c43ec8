//! Unit tests for the portfolio plan builder

use folio::engine::{build_portfolio, dca_tranches, estimate, investment_amounts, resolve};
use folio::models::{
    AllocationResult, AllocationStrategy, MacroStance, RiskProfile, SessionProfile,
};

#[test]
fn amounts_split_follows_the_allocation() {
    let allocation = AllocationResult::new(30.0, 55.0, 10.0, 5.0);
    let amounts = investment_amounts(&allocation, 1_000_000.0);

    assert_eq!(amounts.bond, 300_000);
    assert_eq!(amounts.equity, 550_000);
    assert_eq!(amounts.cash, 100_000);
    assert_eq!(amounts.gold, 50_000);
    assert_eq!(amounts.total(), 1_000_000);
}

#[test]
fn amounts_truncate_toward_zero() {
    let allocation = AllocationResult::new(30.0, 55.0, 10.0, 5.0);
    let amounts = investment_amounts(&allocation, 999.0);

    assert_eq!(amounts.bond, 299);
    assert_eq!(amounts.equity, 549);
    assert_eq!(amounts.cash, 99);
    assert_eq!(amounts.gold, 49);
    assert!(amounts.total() <= 999);
}

#[test]
fn tranche_schedule_deepens_with_smaller_fractions() {
    let tranches = dca_tranches(1_000_000);

    assert_eq!(tranches.len(), 4);
    assert_eq!(tranches[0].amount, 400_000);
    assert_eq!(tranches[1].amount, 300_000);
    assert_eq!(tranches[2].amount, 200_000);
    assert_eq!(tranches[3].amount, 100_000);

    let gates: Vec<f64> = tranches.iter().map(|t| t.rsi_gate).collect();
    assert_eq!(gates, vec![50.0, 40.0, 30.0, 20.0]);

    let fraction_sum: f64 = tranches.iter().map(|t| t.fraction).sum();
    assert!((fraction_sum - 1.0).abs() < 1e-9);
}

#[test]
fn tranches_never_exceed_the_committed_amount() {
    for amount in [0, 1, 999, 12_345, 1_000_000] {
        let total: i64 = dca_tranches(amount).iter().map(|t| t.amount).sum();
        assert!(total <= amount, "amount {amount}: tranches total {total}");
    }
}

#[test]
fn build_portfolio_composes_the_engine_pieces() {
    let profile = SessionProfile::new(
        RiskProfile::Neutral,
        MacroStance::Conservative,
        AllocationStrategy::Balanced,
    );
    let plan = build_portfolio(&profile, 20_000_000.0);

    let allocation = resolve(profile.strategy, profile.macro_stance, profile.risk);
    assert_eq!(plan.allocation, allocation);
    assert_eq!(
        plan.estimate,
        estimate(&allocation, profile.risk, profile.macro_stance)
    );
    assert_eq!(plan.amounts, investment_amounts(&allocation, 20_000_000.0));
    assert_eq!(plan.profile, profile);
    assert_eq!(plan.total_assets, 20_000_000.0);
    assert!(plan.amounts.total() <= 20_000_000);
}

#[test]
fn plan_serializes_with_asset_class_keys() {
    let profile = SessionProfile::new(
        RiskProfile::Aggressive,
        MacroStance::Neutral,
        AllocationStrategy::Aggressive,
    );
    let plan = build_portfolio(&profile, 5_000_000.0);
    let json = serde_json::to_value(&plan).expect("plan serializes");

    assert!(json["allocation"]["Equity"].is_number());
    assert!(json["amounts"]["Bond"].is_number());
    assert_eq!(json["profile"]["macro"], "Neutral");
    assert!(json["generated_at"].is_string());
}
