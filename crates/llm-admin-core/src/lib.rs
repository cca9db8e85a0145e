pub mod catalog;
pub mod error;
pub mod quota;
pub mod roi;
pub mod selection;
pub mod simulator;

pub use catalog::{ModelCatalog, ModelInfo, ModelPricing};
pub use error::CalcError;
pub use quota::{Quota, QuotaScope, QuotaTier, QuotaUsage};
pub use roi::{RoiOutcome, RoiRecord, RoiSummary};
pub use selection::{ModelSelection, MAX_COMPARED_MODELS};
pub use simulator::{SimulationResult, UsageQuery, UsageSimulator};

pub use anyhow::Result;

pub mod prelude {
    pub use crate::catalog::{ModelCatalog, ModelInfo, ModelPricing};
    pub use crate::error::CalcError;
    pub use crate::quota::{Quota, QuotaScope, QuotaTier, QuotaUsage};
    pub use crate::roi::{RoiRecord, RoiSummary};
    pub use crate::selection::ModelSelection;
    pub use crate::simulator::{SimulationResult, UsageQuery, UsageSimulator};
    pub use anyhow::Result;
}
