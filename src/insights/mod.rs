//! Insight selection for the workforce report.
//!
//! Turns [`crate::models::DerivedMetrics`] into a short, ordered list of
//! labelled statements used by the live display and the report's insight
//! block.

mod selector;
mod top_department;

pub use selector::{Insight, InsightKind, NO_DEPARTMENT, find_insight, select_insights};
pub use top_department::top_department;
