//! PreToolUse response document.

use serde::Serialize;

use super::PRE_TOOL_USE;
use crate::decision::Decision;
use crate::error::{GuardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Deny,
}

/// Top-level response (`{"hookSpecificOutput": {...}}`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    pub permission_decision: PermissionDecision,
    /// Present only on deny.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision_reason: Option<String>,
}

impl From<&Decision> for HookResponse {
    fn from(decision: &Decision) -> Self {
        let (permission_decision, permission_decision_reason) = match decision {
            Decision::Allow => (PermissionDecision::Allow, None),
            Decision::Deny { reason } => (PermissionDecision::Deny, Some(reason.clone())),
        };
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: PRE_TOOL_USE,
                permission_decision,
                permission_decision_reason,
            },
        }
    }
}

/// Encode `decision` as a single-line JSON document (no trailing newline).
pub fn encode_response(decision: &Decision) -> Result<String> {
    serde_json::to_string(&HookResponse::from(decision))
        .map_err(|e| GuardError::Internal(format!("encode response failed: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn allow_has_no_reason_field() {
        let s = encode_response(&Decision::Allow).unwrap();
        assert_eq!(
            s,
            r#"{"hookSpecificOutput":{"hookEventName":"PreToolUse","permissionDecision":"allow"}}"#
        );
    }

    #[test]
    fn deny_carries_reason() {
        let s = encode_response(&Decision::protected("/p/scripts/run-tests.sh")).unwrap();
        assert_eq!(
            s,
            concat!(
                r#"{"hookSpecificOutput":{"hookEventName":"PreToolUse","permissionDecision":"deny","#,
                r#""permissionDecisionReason":"Editing /p/scripts/run-tests.sh is not allowed. "#,
                r#"This file is protected from modifications."}}"#
            )
        );
    }
}
