//! Conversion of lift downtime report extractions into typed records.

pub mod cleanup;
mod error;
pub mod lift;
pub mod processed;

pub use error::ReportError;
pub use lift::{LiftCompanyReport, LiftReport, LiftReports, convert_to_reports};
pub use processed::{ProcessedReport, sha256_hex};
