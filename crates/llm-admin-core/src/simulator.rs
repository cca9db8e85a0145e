use crate::catalog::ModelPricing;
use crate::error::{clamp_input, CalcError};
use serde::{Deserialize, Serialize};

/// User-supplied simulation inputs: a hypothetical daily workload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageQuery {
    requests_per_day: f64,
    avg_input_tokens: f64,
    avg_output_tokens: f64,
}

impl UsageQuery {
    pub fn new(requests_per_day: f64, avg_input_tokens: f64, avg_output_tokens: f64) -> Self {
        Self {
            requests_per_day,
            avg_input_tokens,
            avg_output_tokens,
        }
    }

    pub fn requests_per_day(&self) -> f64 {
        self.requests_per_day
    }

    pub fn avg_input_tokens(&self) -> f64 {
        self.avg_input_tokens
    }

    pub fn avg_output_tokens(&self) -> f64 {
        self.avg_output_tokens
    }

    // Interactive adjustment helpers; values never go below zero.

    pub fn adjust_requests_per_day(&mut self, delta: f64) {
        self.requests_per_day = (self.requests_per_day + delta).max(0.0);
    }

    pub fn adjust_avg_input_tokens(&mut self, delta: f64) {
        self.avg_input_tokens = (self.avg_input_tokens + delta).max(0.0);
    }

    pub fn adjust_avg_output_tokens(&mut self, delta: f64) {
        self.avg_output_tokens = (self.avg_output_tokens + delta).max(0.0);
    }
}

impl Default for UsageQuery {
    fn default() -> Self {
        Self::new(100.0, 500.0, 1500.0)
    }
}

/// Derived cost estimate for one model under one query. Recomputed on
/// every input change, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    daily_cost: f64,
    monthly_cost: f64,
    annual_cost: f64,
    total_tokens: f64,
    processing_time_secs: f64,
    cost_per_request: f64,
}

impl SimulationResult {
    pub fn daily_cost(&self) -> f64 {
        self.daily_cost
    }

    /// 30-day approximation, an exact multiple of the daily cost.
    pub fn monthly_cost(&self) -> f64 {
        self.monthly_cost
    }

    /// 365-day approximation, an exact multiple of the daily cost.
    pub fn annual_cost(&self) -> f64 {
        self.annual_cost
    }

    /// Tokens consumed per day across all requests.
    pub fn total_tokens(&self) -> f64 {
        self.total_tokens
    }

    /// Seconds per day spent generating at the model's average speed.
    pub fn processing_time_secs(&self) -> f64 {
        self.processing_time_secs
    }

    pub fn cost_per_request(&self) -> f64 {
        self.cost_per_request
    }
}

pub struct UsageSimulator;

impl UsageSimulator {
    pub fn new() -> Self {
        Self
    }

    /// Runs the cost projection for one query against one model's rates.
    ///
    /// Negative inputs clamp to zero. Non-finite inputs reject with
    /// `InvalidInput`; a model speed of zero rejects with
    /// `DivisionByZero` rather than producing an infinite duration.
    pub fn simulate(
        &self,
        query: &UsageQuery,
        pricing: &ModelPricing,
    ) -> Result<SimulationResult, CalcError> {
        let requests_per_day = clamp_input("requests_per_day", query.requests_per_day)?;
        let avg_input_tokens = clamp_input("avg_input_tokens", query.avg_input_tokens)?;
        let avg_output_tokens = clamp_input("avg_output_tokens", query.avg_output_tokens)?;

        let daily_input_cost = requests_per_day * avg_input_tokens * pricing.input_cost_per_token();
        let daily_output_cost =
            requests_per_day * avg_output_tokens * pricing.output_cost_per_token();
        let daily_cost = daily_input_cost + daily_output_cost;

        let total_tokens = requests_per_day * (avg_input_tokens + avg_output_tokens);

        if pricing.average_speed() <= 0.0 {
            return Err(CalcError::DivisionByZero {
                what: "average_speed",
            });
        }
        let processing_time_secs = total_tokens / pricing.average_speed();

        let cost_per_request = if requests_per_day == 0.0 {
            0.0
        } else {
            daily_cost / requests_per_day
        };

        Ok(SimulationResult {
            daily_cost,
            monthly_cost: daily_cost * 30.0,
            annual_cost: daily_cost * 365.0,
            total_tokens,
            processing_time_secs,
            cost_per_request,
        })
    }
}

impl Default for UsageSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bard_pricing() -> ModelPricing {
        ModelPricing::new(0.000015, 0.00003, 2500.0, 32_000)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_simulation() {
        let simulator = UsageSimulator::new();
        let query = UsageQuery::new(100.0, 500.0, 1500.0);

        let result = simulator.simulate(&query, &bard_pricing()).unwrap();

        assert_close(result.daily_cost(), 5.25);
        assert_close(result.monthly_cost(), 157.50);
        assert_close(result.annual_cost(), 1916.25);
        assert_eq!(result.total_tokens(), 200_000.0);
        assert_eq!(result.processing_time_secs(), 80.0);
        assert_close(result.cost_per_request(), 0.0525);
    }

    #[test]
    fn test_monthly_and_annual_are_exact_multiples() {
        let simulator = UsageSimulator::new();

        for requests in [1.0, 50.0, 750.0, 10_000.0] {
            let query = UsageQuery::new(requests, 321.0, 987.0);
            let result = simulator.simulate(&query, &bard_pricing()).unwrap();

            assert_eq!(result.monthly_cost(), result.daily_cost() * 30.0);
            assert_eq!(result.annual_cost(), result.daily_cost() * 365.0);
        }
    }

    #[test]
    fn test_simulation_is_idempotent() {
        let simulator = UsageSimulator::new();
        let query = UsageQuery::new(137.0, 411.0, 1289.0);

        let first = simulator.simulate(&query, &bard_pricing()).unwrap();
        let second = simulator.simulate(&query, &bard_pricing()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_inputs_clamp_to_zero() {
        let simulator = UsageSimulator::new();
        let query = UsageQuery::new(-100.0, 500.0, 1500.0);

        let result = simulator.simulate(&query, &bard_pricing()).unwrap();
        assert_eq!(result.daily_cost(), 0.0);
        assert_eq!(result.total_tokens(), 0.0);
        assert_eq!(result.cost_per_request(), 0.0);
    }

    #[test]
    fn test_nan_input_rejected() {
        let simulator = UsageSimulator::new();
        let query = UsageQuery::new(100.0, f64::NAN, 1500.0);

        assert!(matches!(
            simulator.simulate(&query, &bard_pricing()),
            Err(CalcError::InvalidInput {
                field: "avg_input_tokens",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_speed_rejected() {
        let simulator = UsageSimulator::new();
        let query = UsageQuery::default();
        let pricing = ModelPricing::new(0.000015, 0.00003, 0.0, 32_000);

        assert_eq!(
            simulator.simulate(&query, &pricing),
            Err(CalcError::DivisionByZero {
                what: "average_speed"
            })
        );
    }

    #[test]
    fn test_adjust_never_goes_negative() {
        let mut query = UsageQuery::new(5.0, 0.0, 10.0);
        query.adjust_requests_per_day(-10.0);
        query.adjust_avg_input_tokens(-1.0);

        assert_eq!(query.requests_per_day(), 0.0);
        assert_eq!(query.avg_input_tokens(), 0.0);
    }
}
