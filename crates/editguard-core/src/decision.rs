//! Guard verdict.

/// Outcome of evaluating one hook request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: String },
}

impl Decision {
    /// Deny with the standard protected-file message for `path`.
    pub fn protected(path: &str) -> Self {
        Decision::Deny {
            reason: format!(
                "Editing {path} is not allowed. This file is protected from modifications."
            ),
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Deny { reason } => Some(reason),
        }
    }
}
