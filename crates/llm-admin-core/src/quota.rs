use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Presentational severity for a quota. Drives gauge colors only; no
/// enforcement action is attached to any tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotaTier {
    Normal,
    Warning,
    Critical,
}

impl QuotaTier {
    /// Maps a usage percentage to its tier. Both thresholds are
    /// inclusive: 75.0 is already Warning, 90.0 already Critical.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            QuotaTier::Critical
        } else if percentage >= 75.0 {
            QuotaTier::Warning
        } else {
            QuotaTier::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuotaTier::Normal => "normal",
            QuotaTier::Warning => "warning",
            QuotaTier::Critical => "critical",
        }
    }
}

/// Level at which a quota is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotaScope {
    Organization,
    User,
    Service,
}

impl QuotaScope {
    pub fn label(&self) -> &'static str {
        match self {
            QuotaScope::Organization => "organization",
            QuotaScope::User => "user",
            QuotaScope::Service => "service",
        }
    }
}

/// Monthly token allowance consumption. `used` may legitimately exceed
/// `total`: overage is an expected state, reported past 100% and
/// rendered as Critical rather than treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaUsage {
    used: u64,
    total: u64,
}

impl QuotaUsage {
    pub fn new(used: u64, total: u64) -> Self {
        Self { used, total }
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Usage as a percentage of the allowance, unclamped. `None` when
    /// the allowance is zero, the defined sentinel for an undefined
    /// ratio.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some((self.used as f64 / self.total as f64) * 100.0)
    }

    /// Severity for display. A zero allowance has no meaningful ratio
    /// and reports Normal.
    pub fn tier(&self) -> QuotaTier {
        match self.percentage() {
            Some(pct) => QuotaTier::from_percentage(pct),
            None => QuotaTier::Normal,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.used)
    }

    pub fn is_over(&self) -> bool {
        self.used > self.total
    }

    /// Straight-line projection of month-end consumption: the daily
    /// average over the days elapsed in `today`'s month, times the
    /// month's length.
    pub fn projected_month_end(&self, today: NaiveDate) -> f64 {
        let elapsed_days = today.day() as f64;
        let daily_average = self.used as f64 / elapsed_days;
        daily_average * days_in_month(today) as f64
    }
}

/// A named allowance at some scope, as listed by the quota manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quota {
    name: String,
    scope: QuotaScope,
    usage: QuotaUsage,
}

impl Quota {
    pub fn new(name: impl Into<String>, scope: QuotaScope, usage: QuotaUsage) -> Self {
        Self {
            name: name.into(),
            scope,
            usage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> QuotaScope {
        self.scope
    }

    pub fn usage(&self) -> &QuotaUsage {
        &self.usage
    }

    pub fn record_tokens(&mut self, tokens: u64) {
        self.usage.used += tokens;
    }
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    first_of_next.pred_opt().unwrap().day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_on_warning_boundary() {
        let usage = QuotaUsage::new(150_000, 200_000);
        assert_eq!(usage.percentage(), Some(75.0));
        assert_eq!(usage.tier(), QuotaTier::Warning);
    }

    #[test]
    fn test_percentage_on_critical_boundary() {
        let usage = QuotaUsage::new(180_000, 200_000);
        assert_eq!(usage.percentage(), Some(90.0));
        assert_eq!(usage.tier(), QuotaTier::Critical);
    }

    #[test]
    fn test_below_warning_is_normal() {
        let usage = QuotaUsage::new(149_999, 200_000);
        assert_eq!(usage.tier(), QuotaTier::Normal);
    }

    #[test]
    fn test_zero_total_has_no_percentage() {
        let usage = QuotaUsage::new(500, 0);
        assert_eq!(usage.percentage(), None);
        assert_eq!(usage.tier(), QuotaTier::Normal);
    }

    #[test]
    fn test_overage_exceeds_hundred_percent() {
        let usage = QuotaUsage::new(250_000, 200_000);
        assert_eq!(usage.percentage(), Some(125.0));
        assert_eq!(usage.tier(), QuotaTier::Critical);
        assert!(usage.is_over());
        assert_eq!(usage.remaining(), 0);
    }

    #[test]
    fn test_remaining_saturates() {
        assert_eq!(QuotaUsage::new(50, 200).remaining(), 150);
        assert_eq!(QuotaUsage::new(300, 200).remaining(), 0);
    }

    #[test]
    fn test_month_end_projection() {
        // 10 days into a 30-day month at 1000 tokens/day.
        let usage = QuotaUsage::new(10_000, 100_000);
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(usage.projected_month_end(today), 30_000.0);
    }

    #[test]
    fn test_days_in_month_handles_december() {
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 12, 5).unwrap()), 31);
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()), 29);
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2023, 2, 5).unwrap()), 28);
    }

    #[test]
    fn test_record_tokens_accumulates() {
        let mut quota = Quota::new(
            "Acme Corp",
            QuotaScope::Organization,
            QuotaUsage::new(1_000, 10_000),
        );
        quota.record_tokens(500);
        assert_eq!(quota.usage().used(), 1_500);
        assert_eq!(quota.scope(), QuotaScope::Organization);
    }
}
