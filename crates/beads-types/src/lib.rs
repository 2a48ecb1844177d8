pub mod check;
pub mod error;
pub mod report;
pub mod status;
pub mod version;

pub use check::CheckResult;
pub use error::{Error, Result};
pub use report::DiagnosticReport;
pub use status::Status;
pub use version::{Version, compare_versions};
