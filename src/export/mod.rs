//! Export boundary for assembled reports.
//!
//! The engine never depends on a concrete document format. Anything that
//! implements [`DocumentExporter`] can be injected; [`JsonExporter`] is the
//! one the binary ships with.

mod exporter;
mod json;
mod outcome;

pub use exporter::{DocumentExporter, ExportError, ExportFailureKind, ExportReceipt};
pub use json::JsonExporter;
pub use outcome::{ExportOutcome, run_export, run_export_within};
