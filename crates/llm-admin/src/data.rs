//! In-memory demo dataset rendered by the dashboard.

use llm_admin_core::{Quota, QuotaScope, QuotaUsage, RoiRecord};

pub struct DemoData {
    pub quotas: Vec<Quota>,
    pub roi_records: Vec<RoiRecord>,
}

impl DemoData {
    pub fn seed() -> Self {
        let quotas = vec![
            Quota::new(
                "Acme Corp",
                QuotaScope::Organization,
                QuotaUsage::new(150_000, 200_000),
            ),
            Quota::new(
                "Globex",
                QuotaScope::Organization,
                QuotaUsage::new(64_000, 160_000),
            ),
            Quota::new(
                "John Doe",
                QuotaScope::User,
                QuotaUsage::new(180_000, 200_000),
            ),
            Quota::new(
                "Jane Smith",
                QuotaScope::User,
                QuotaUsage::new(80_000, 120_000),
            ),
            Quota::new(
                "Support Chatbot",
                QuotaScope::Service,
                QuotaUsage::new(230_000, 220_000),
            ),
            Quota::new(
                "Code Review Bot",
                QuotaScope::Service,
                QuotaUsage::new(45_000, 100_000),
            ),
        ];

        let roi_records = vec![
            RoiRecord::new("John Doe", "Engineering", 75.0, 2.5, 20.0, 150_000, 125.50),
            RoiRecord::new("Jane Smith", "Product", 85.0, 1.8, 22.0, 80_000, 95.20),
            RoiRecord::new("Alex Chen", "Support", 55.0, 3.2, 21.0, 210_000, 180.75),
        ];

        Self {
            quotas,
            roi_records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_admin_core::QuotaTier;

    #[test]
    fn test_seed_covers_every_scope() {
        let data = DemoData::seed();
        for scope in [QuotaScope::Organization, QuotaScope::User, QuotaScope::Service] {
            assert!(data.quotas.iter().any(|q| q.scope() == scope));
        }
    }

    #[test]
    fn test_seed_covers_every_tier() {
        let data = DemoData::seed();
        for tier in [QuotaTier::Normal, QuotaTier::Warning, QuotaTier::Critical] {
            assert!(data.quotas.iter().any(|q| q.usage().tier() == tier));
        }
    }

    #[test]
    fn test_seed_roi_records_compute() {
        let data = DemoData::seed();
        for record in &data.roi_records {
            assert!(record.outcome().is_ok());
        }
    }
}
