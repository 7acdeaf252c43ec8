use folio::engine::{self, dca_tranches};
use folio::models::{
    AllocationStrategy, MacroStance, RiskProfile, SessionProfile, TechnicalReading,
};

fn main() {
    let journeys = [
        SessionProfile::new(
            RiskProfile::Conservative,
            MacroStance::Conservative,
            AllocationStrategy::Defensive,
        ),
        SessionProfile::new(
            RiskProfile::Neutral,
            MacroStance::Conservative,
            AllocationStrategy::Balanced,
        ),
        SessionProfile::new(
            RiskProfile::Aggressive,
            MacroStance::Aggressive,
            AllocationStrategy::Aggressive,
        ),
    ];

    for (i, profile) in journeys.iter().enumerate() {
        let plan = engine::build_portfolio(profile, 20_000_000.0);
        println!("Journey {}:", i + 1);
        print_plan(&plan);
        println!();
    }

    let reading = TechnicalReading::new(35.0, 8.5, 3.2);
    let score = engine::score(&reading);
    println!("Sample signal:");
    println!("  RSI: {:.1}", reading.rsi);
    println!(
        "  Momentum: {:.1}% short / {:.1}% long",
        reading.short_term_momentum_pct, reading.long_term_momentum_pct
    );
    println!("  Score: {} ({:?})", score, engine::action_for(score));
}

fn print_plan(plan: &folio::models::PortfolioPlan) {
    println!(
        "  Profile: {} risk / {} macro / {} strategy",
        plan.profile.risk, plan.profile.macro_stance, plan.profile.strategy
    );
    for (asset, weight) in plan.allocation.iter() {
        println!("  {}: {:.1}%", asset.name(), weight);
    }
    println!(
        "  Expected return: {:.1}% | volatility: {:.1}% | ratio: {:.2}",
        plan.estimate.expected_return * 100.0,
        plan.estimate.expected_volatility * 100.0,
        plan.estimate.sharpe_like_ratio
    );
    println!("  Equity amount: {}", plan.amounts.equity);
    for tranche in dca_tranches(plan.amounts.equity) {
        println!(
            "    {:.0}% at RSI <= {:.0}: {}",
            tranche.fraction * 100.0,
            tranche.rsi_gate,
            tranche.amount
        );
    }
}
