//! PreToolUse request payload.
//!
//! Only `tool_name` and `tool_input.file_path` drive the decision. Objects are
//! captured as raw key -> raw value maps first, so:
//! - duplicate keys resolve to the last occurrence;
//! - values of other keys are skipped without decoding escapes or tracking
//!   nesting depth, and cannot make the request fail to decode.
//!
//! A driving field whose last value is not a string reads as absent.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer, Visitor};
use serde_json::value::RawValue;

use crate::error::{GuardError, Result};

/// Hook request as sent by the host.
#[derive(Debug, Default)]
pub struct HookRequest {
    /// Tool about to run (e.g. "Edit"); empty when absent.
    pub tool_name: String,
    pub tool_input: ToolInput,
    /// Log context only.
    pub session_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct ToolInput {
    pub file_path: Option<String>,
}

impl HookRequest {
    /// Target path, or "" when the tool input names none.
    pub fn file_path(&self) -> &str {
        self.tool_input.file_path.as_deref().unwrap_or("")
    }
}

/// Decode one request document.
///
/// Fails only when the document (or its `tool_input`) is not a JSON object.
pub fn decode_request(bytes: &[u8]) -> Result<HookRequest> {
    let top: RawObject = serde_json::from_slice(bytes).map_err(malformed)?;

    let tool_input = match top.get(b"tool_input".as_slice()) {
        Some(raw) => {
            let obj: RawObject = serde_json::from_str(raw.get()).map_err(malformed)?;
            ToolInput {
                file_path: string_field(&obj, "file_path"),
            }
        }
        None => ToolInput::default(),
    };

    Ok(HookRequest {
        tool_name: string_field(&top, "tool_name").unwrap_or_default(),
        tool_input,
        session_id: string_field(&top, "session_id"),
    })
}

fn malformed(e: serde_json::Error) -> GuardError {
    GuardError::MalformedRequest(e.to_string())
}

/// Last value per key, undecoded. `HashMap` insertion keeps the last duplicate.
type RawObject = HashMap<RawKey, Box<RawValue>>;

fn string_field(obj: &RawObject, key: &str) -> Option<String> {
    let raw = obj.get(key.as_bytes())?;
    serde_json::from_str::<String>(raw.get()).ok()
}

/// Object key read as unvalidated bytes; a key holding an unpaired surrogate
/// escape is kept instead of failing the whole object.
#[derive(Debug, PartialEq, Eq, Hash)]
struct RawKey(Vec<u8>);

impl Borrow<[u8]> for RawKey {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RawKey {
    fn deserialize<D>(d: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_bytes(RawKeyVisitor)
    }
}

struct RawKeyVisitor;

impl<'de> Visitor<'de> for RawKeyVisitor {
    type Value = RawKey;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object key")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> std::result::Result<RawKey, E> {
        Ok(RawKey(v.to_vec()))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> std::result::Result<RawKey, E> {
        Ok(RawKey(v))
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<RawKey, E> {
        Ok(RawKey(v.as_bytes().to_vec()))
    }
}
