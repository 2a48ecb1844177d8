use beads_types::Status;

/// One-line summary printed above the check list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub level: Status,
    pub label: String,
}

impl StatusBadge {
    pub fn new(level: Status, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn icon(&self) -> &'static str {
        status_icon(self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLineViewModel {
    pub name: String,
    pub status: Status,
    pub message: String,
    pub detail: Option<String>,
    pub fix: Option<String>,
}

impl CheckLineViewModel {
    pub fn icon(&self) -> &'static str {
        status_icon(self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportViewModel {
    pub badge: StatusBadge,
    pub path: String,
    pub tool_version: String,
    pub checks: Vec<CheckLineViewModel>,
}

pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Ok => "✓",
        Status::Warning => "⚠",
        Status::Error => "✗",
    }
}
