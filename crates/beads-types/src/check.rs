use serde::{Deserialize, Serialize};

use crate::Status;

/// Result of one check invocation.
///
/// Built only through [`CheckResult::ok`], [`CheckResult::warning`] and
/// [`CheckResult::error`], so a non-ok result always carries a fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: Status,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl CheckResult {
    pub fn ok(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Ok,
            message: message.into(),
            detail: None,
            fix: None,
        }
    }

    pub fn warning(
        name: impl Into<String>,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self::with_fix(name, Status::Warning, message, fix)
    }

    pub fn error(
        name: impl Into<String>,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self::with_fix(name, Status::Error, message, fix)
    }

    fn with_fix(
        name: impl Into<String>,
        status: Status,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        let fix = fix.into();
        debug_assert!(!fix.is_empty(), "non-ok check results need a fix");
        Self {
            name: name.into(),
            status,
            message: message.into(),
            detail: None,
            fix: Some(fix),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.detail = (!detail.is_empty()).then_some(detail);
        self
    }

    pub fn detail(&self) -> &str {
        self.detail.as_deref().unwrap_or("")
    }

    pub fn fix(&self) -> &str {
        self.fix.as_deref().unwrap_or("")
    }
}
