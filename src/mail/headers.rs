//! `From:` header parsing

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{HeaderInput, SenderIdentity};

static FROM_NAME_AND_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)From: (.*) <(.*)>").expect("valid regex"));

static FROM_ADDRESS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)From: (.*)").expect("valid regex"));

/// Extract the sender from a header block.
///
/// Every line starting with `From:` is considered and the last one that parses
/// wins. Captured values are returned untrimmed. Without a usable `From:` line
/// both fields are empty.
pub fn parse_from_header(headers: &HeaderInput) -> SenderIdentity {
    let mut identity = SenderIdentity::default();

    for line in headers.lines() {
        if !line.starts_with("From:") {
            continue;
        }

        if let Some(caps) = FROM_NAME_AND_ADDRESS.captures(&line) {
            identity.name = caps[1].to_string();
            identity.email = caps[2].to_string();
        } else if let Some(caps) = FROM_ADDRESS_ONLY.captures(&line) {
            identity.name = String::new();
            identity.email = caps[1].to_string();
        }
    }

    identity
}
