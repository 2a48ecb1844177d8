//! # Presentation Layer
//!
//! ```text
//! [ DiagnosticReport ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> stdout
//! ```
//!
//! * `view_models`: what the plain output shows. Pure data.
//! * `presenter`: folds a report into a view model (badge, per-check lines).
//! * `renderer`: layout and color for plain text; JSON is the report itself,
//!   so the machine contract never depends on the view model.

pub mod presenter;
pub mod renderer;
pub mod view_models;

pub use presenter::present_report;
pub use renderer::ConsoleRenderer;
pub use view_models::{CheckLineViewModel, ReportViewModel, StatusBadge};
