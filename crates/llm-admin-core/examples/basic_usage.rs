use llm_admin_core::prelude::*;

fn main() -> Result<()> {
    let catalog = ModelCatalog::builtin();
    let simulator = UsageSimulator::new();

    println!("Cost projection for every model, 100 requests/day at 500 in / 1500 out:\n");

    let query = UsageQuery::new(100.0, 500.0, 1500.0);
    for model in catalog.enabled_models() {
        let result = simulator.simulate(&query, model.pricing())?;
        println!(
            "  {:<14} ({:<12}) daily ${:>7.2}  monthly ${:>9.2}  ~{:.0}s/day",
            model.name(),
            model.provider(),
            result.daily_cost(),
            result.monthly_cost(),
            result.processing_time_secs(),
        );
    }

    println!();

    let quota = QuotaUsage::new(150_000, 200_000);
    println!(
        "Quota at {} / {} tokens: {:.1}% ({})",
        quota.used(),
        quota.total(),
        quota.percentage().unwrap_or(0.0),
        quota.tier().label(),
    );

    let record = RoiRecord::new("John Doe", "Engineering", 75.0, 2.5, 20.0, 150_000, 125.50);
    let outcome = record.outcome()?;
    println!(
        "ROI for {}: {:.1} h/month saved, net ${:.2}, {:.1}x return",
        record.name(),
        outcome.monthly_hours(),
        outcome.net_savings(),
        outcome.roi(),
    );

    Ok(())
}
