//! Hook exchange: one request in, one response out.

use std::io::{Read, Write};

use editguard_core::error::{GuardError, Result};
use editguard_core::protocol::response::encode_response;
use editguard_core::Decision;

use crate::policy::engine::{fail_open, Guard};

pub fn read_request<R: Read>(mut input: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Write `decision` as exactly one JSON line.
pub fn write_response<W: Write>(mut output: W, decision: &Decision) -> Result<()> {
    let doc = encode_response(decision)?;
    writeln!(output, "{doc}")
        .and_then(|_| output.flush())
        .map_err(|e| GuardError::Internal(format!("write response failed: {e}")))
}

/// Full exchange. Never fails: read errors fail open, write errors are logged.
pub fn run<R: Read, W: Write>(guard: &Guard, input: R, output: W) -> Decision {
    let decision = match read_request(input) {
        Ok(bytes) => guard.decide(&bytes),
        Err(err) => fail_open(&err),
    };

    if let Err(err) = write_response(output, &decision) {
        tracing::error!(code = err.code().as_str(), error = %err, "response not written");
    }
    decision
}
