use editguard_core::error::GuardError;
use editguard_core::protocol::request::{decode_request, HookRequest};
use editguard_core::Decision;

use crate::config::GuardConfig;

use super::protected::ProtectedSet;

/// Tool kinds that write file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutatingTool {
    Edit,
    Write,
    MultiEdit,
}

impl MutatingTool {
    /// Exact, case-sensitive match on the host's tool name.
    pub fn parse(tool_name: &str) -> Option<Self> {
        match tool_name {
            "Edit" => Some(MutatingTool::Edit),
            "Write" => Some(MutatingTool::Write),
            "MultiEdit" => Some(MutatingTool::MultiEdit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MutatingTool::Edit => "Edit",
            MutatingTool::Write => "Write",
            MutatingTool::MultiEdit => "MultiEdit",
        }
    }
}

/// Single-shot edit guard.
/// Construct once per invocation from the base directory, then decide.
#[derive(Debug, Clone)]
pub struct Guard {
    protected: ProtectedSet,
}

impl Guard {
    pub fn new(base_dir: &str) -> Self {
        Self {
            protected: ProtectedSet::resolve(base_dir),
        }
    }

    pub fn from_config(cfg: &GuardConfig) -> Self {
        Self::new(&cfg.base_dir)
    }

    pub fn protected(&self) -> &ProtectedSet {
        &self.protected
    }

    /// Decode and evaluate raw request bytes. Undecodable input fails open.
    pub fn decide(&self, request_bytes: &[u8]) -> Decision {
        match decode_request(request_bytes) {
            Ok(req) => self.evaluate(&req),
            Err(err) => fail_open(&err),
        }
    }

    /// Evaluate an already decoded request.
    pub fn evaluate(&self, req: &HookRequest) -> Decision {
        let Some(tool) = MutatingTool::parse(&req.tool_name) else {
            tracing::debug!(tool = %req.tool_name, "not a mutating tool, allow");
            return Decision::Allow;
        };

        let path = req.file_path();
        if self.protected.contains(path) {
            tracing::info!(
                tool = tool.as_str(),
                path,
                session_id = req.session_id.as_deref().unwrap_or(""),
                "protected file, deny"
            );
            return Decision::protected(path);
        }

        tracing::debug!(tool = tool.as_str(), path, "allow");
        Decision::Allow
    }
}

/// Map any request error to allow.
pub fn fail_open(err: &GuardError) -> Decision {
    tracing::warn!(code = err.code().as_str(), error = %err, "request not understood, failing open");
    Decision::Allow
}
