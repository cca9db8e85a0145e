//! TUI widget modules

pub mod compare_popup;
pub mod header;
pub mod overview;
pub mod quota_popup;
pub mod quotas;
pub mod roi;
pub mod shortcuts;
pub mod simulator;

pub use compare_popup::*;
pub use header::*;
pub use overview::*;
pub use quota_popup::*;
pub use quotas::*;
pub use roi::*;
pub use shortcuts::*;
pub use simulator::*;
