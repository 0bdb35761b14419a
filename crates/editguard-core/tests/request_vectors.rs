//! Request decoding vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use editguard_core::protocol::request::decode_request;

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn request_vectors() {
    let files = [
        "edit_full.json",
        "write_extra_fields.json",
        "multiedit_no_path.json",
        "bash_command.json",
        "empty_object.json",
        "truncated.json",
        "empty_input.json",
        "top_level_array.json",
        "path_not_string.json",
        "tool_input_null.json",
        "invalid_utf8.json",
        "session_lone_surrogate.json",
        "cwd_deep_nesting.json",
        "duplicate_file_path.json",
        "duplicate_tool_name.json",
    ];

    for f in files {
        let v = load(f);
        let raw = v.input.decode();
        let res = decode_request(&raw);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let req = res.expect("expected ok request");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(req.tool_name, ex["tool_name"].as_str().unwrap(), "vector={}", v.description);
        assert_eq!(req.file_path(), ex["file_path"].as_str().unwrap(), "vector={}", v.description);

        if let Some(sid) = ex.get("session_id").and_then(|s| s.as_str()) {
            assert_eq!(req.session_id.as_deref(), Some(sid), "vector={}", v.description);
        }
    }
}
