use crate::mail::strip_tags;

/// Clean a single-line text setting: tags removed, tabs and line breaks turned
/// into spaces, whitespace runs collapsed, ends trimmed.
pub fn sanitize_text_field(input: &str) -> String {
    strip_tags(input)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
