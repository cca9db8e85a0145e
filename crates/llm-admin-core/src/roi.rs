use crate::error::{clamp_input, CalcError};
use serde::{Deserialize, Serialize};

/// Per-user ROI inputs: what an hour of their time costs, how much time
/// the assistant saves them, and what their token usage bills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiRecord {
    name: String,
    department: String,
    cost_per_hour: f64,
    hours_per_day: f64,
    days_per_month: f64,
    monthly_tokens: u64,
    token_cost: f64,
}

impl RoiRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        cost_per_hour: f64,
        hours_per_day: f64,
        days_per_month: f64,
        monthly_tokens: u64,
        token_cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            cost_per_hour,
            hours_per_day,
            days_per_month,
            monthly_tokens,
            token_cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn cost_per_hour(&self) -> f64 {
        self.cost_per_hour
    }

    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    pub fn days_per_month(&self) -> f64 {
        self.days_per_month
    }

    pub fn monthly_tokens(&self) -> u64 {
        self.monthly_tokens
    }

    pub fn token_cost(&self) -> f64 {
        self.token_cost
    }

    /// Computes the monthly value of the saved time against the token
    /// spend. A zero token cost makes the return ratio undefined and
    /// rejects with `DivisionByZero` instead of reporting infinity.
    pub fn outcome(&self) -> Result<RoiOutcome, CalcError> {
        let (monthly_hours, monthly_savings, token_cost) = self.savings_parts()?;

        if token_cost == 0.0 {
            return Err(CalcError::DivisionByZero { what: "token_cost" });
        }

        let net_savings = monthly_savings - token_cost;
        Ok(RoiOutcome {
            monthly_hours,
            monthly_savings,
            net_savings,
            roi: net_savings / token_cost,
        })
    }

    /// The division-free pieces, shared with the aggregate summary.
    fn savings_parts(&self) -> Result<(f64, f64, f64), CalcError> {
        let cost_per_hour = clamp_input("cost_per_hour", self.cost_per_hour)?;
        let hours_per_day = clamp_input("hours_per_day", self.hours_per_day)?;
        let days_per_month = clamp_input("days_per_month", self.days_per_month)?;
        let token_cost = clamp_input("token_cost", self.token_cost)?;

        let monthly_hours = hours_per_day * days_per_month;
        let monthly_savings = monthly_hours * cost_per_hour;
        Ok((monthly_hours, monthly_savings, token_cost))
    }
}

/// Derived monthly value for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiOutcome {
    monthly_hours: f64,
    monthly_savings: f64,
    net_savings: f64,
    roi: f64,
}

impl RoiOutcome {
    pub fn monthly_hours(&self) -> f64 {
        self.monthly_hours
    }

    pub fn monthly_savings(&self) -> f64 {
        self.monthly_savings
    }

    pub fn net_savings(&self) -> f64 {
        self.net_savings
    }

    /// Net savings per dollar of token spend.
    pub fn roi(&self) -> f64 {
        self.roi
    }
}

/// Aggregate across all users, as shown by the analysis header cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    total_hours: f64,
    total_savings: f64,
    total_net_savings: f64,
    total_cost: f64,
    user_count: usize,
}

impl RoiSummary {
    pub fn from_records(records: &[RoiRecord]) -> Result<Self, CalcError> {
        let mut summary = RoiSummary {
            total_hours: 0.0,
            total_savings: 0.0,
            total_net_savings: 0.0,
            total_cost: 0.0,
            user_count: records.len(),
        };

        for record in records {
            let (monthly_hours, monthly_savings, token_cost) = record.savings_parts()?;
            summary.total_hours += monthly_hours;
            summary.total_savings += monthly_savings;
            summary.total_net_savings += monthly_savings - token_cost;
            summary.total_cost += token_cost;
        }

        Ok(summary)
    }

    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    pub fn total_savings(&self) -> f64 {
        self.total_savings
    }

    pub fn total_net_savings(&self) -> f64 {
        self.total_net_savings
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn user_count(&self) -> usize {
        self.user_count
    }

    /// Fleet-wide return ratio; `None` when nothing was spent.
    pub fn average_roi(&self) -> Option<f64> {
        if self.total_cost == 0.0 {
            return None;
        }
        Some(self.total_net_savings / self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> RoiRecord {
        RoiRecord::new("John Doe", "Engineering", 75.0, 2.5, 20.0, 150_000, 125.50)
    }

    fn jane() -> RoiRecord {
        RoiRecord::new("Jane Smith", "Product", 85.0, 1.8, 22.0, 80_000, 95.20)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_outcome() {
        let outcome = john().outcome().unwrap();

        assert_eq!(outcome.monthly_hours(), 50.0);
        assert_eq!(outcome.monthly_savings(), 3750.0);
        assert_close(outcome.net_savings(), 3624.50);
        assert!((outcome.roi() - 28.88).abs() < 0.01);
    }

    #[test]
    fn test_outcome_is_idempotent() {
        assert_eq!(jane().outcome().unwrap(), jane().outcome().unwrap());
    }

    #[test]
    fn test_zero_token_cost_rejected() {
        let record = RoiRecord::new("Free Rider", "Sales", 60.0, 1.0, 20.0, 0, 0.0);
        assert_eq!(
            record.outcome(),
            Err(CalcError::DivisionByZero { what: "token_cost" })
        );
    }

    #[test]
    fn test_negative_hours_clamp_to_zero() {
        let record = RoiRecord::new("Ghost", "Ops", 75.0, -2.0, 20.0, 1_000, 10.0);
        let outcome = record.outcome().unwrap();

        assert_eq!(outcome.monthly_hours(), 0.0);
        assert_eq!(outcome.monthly_savings(), 0.0);
        assert_close(outcome.net_savings(), -10.0);
    }

    #[test]
    fn test_non_finite_cost_rejected() {
        let record = RoiRecord::new("Broken", "Ops", f64::INFINITY, 2.0, 20.0, 1_000, 10.0);
        assert!(matches!(
            record.outcome(),
            Err(CalcError::InvalidInput {
                field: "cost_per_hour",
                ..
            })
        ));
    }

    #[test]
    fn test_summary_aggregates_records() {
        let records = [john(), jane()];
        let summary = RoiSummary::from_records(&records).unwrap();

        // John: 50h, $3750; Jane: 39.6h, $3366.
        assert_close(summary.total_hours(), 89.6);
        assert_close(summary.total_savings(), 7116.0);
        assert_close(summary.total_cost(), 220.70);
        assert_close(summary.total_net_savings(), 6895.30);
        assert_eq!(summary.user_count(), 2);

        let avg = summary.average_roi().unwrap();
        assert!((avg - 6895.30 / 220.70).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_has_no_average() {
        let summary = RoiSummary::from_records(&[]).unwrap();
        assert_eq!(summary.average_roi(), None);
        assert_eq!(summary.user_count(), 0);
    }
}
