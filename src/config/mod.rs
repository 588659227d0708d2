//! Configuration loading for the workforce report engine.
//!
//! # Example
//!
//! ```no_run
//! use workforce_report::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Report file prefix: {}", config.report().file_prefix);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, REPORT_CONFIG_FILE};
pub use types::{MAX_NEXT_REVIEW_DAYS, ReportConfig};
