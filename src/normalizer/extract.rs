/// Locate the JSON payload inside raw LLM output.
///
/// Models wrap payloads in Markdown fences, prefix them with a `JSON:`
/// label, or surround them with prose despite instructions not to. This
/// peels all three off and returns the first-`{`-to-last-`}` span, or
/// `None` when no object-shaped text exists at all.
pub(crate) fn extract_json_candidate(raw: &str) -> Option<&str> {
    let text = strip_label(strip_fences(raw.trim()));
    brace_span(text)
}

/// If the text contains a fenced code block (optionally tagged `json`),
/// keep only the fenced content.
fn strip_fences(text: &str) -> &str {
    let Some(start) = text.find("```") else {
        return text;
    };
    let after = &text[start + 3..];
    let after = after
        .strip_prefix("json")
        .or_else(|| after.strip_prefix("JSON"))
        .unwrap_or(after);
    match after.find("```") {
        Some(end) => after[..end].trim(),
        None => after.trim(),
    }
}

/// Drop a leading case-insensitive `JSON:` label.
fn strip_label(text: &str) -> &str {
    let t = text.trim_start();
    match t.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("json:") => t[5..].trim_start(),
        _ => t,
    }
}

/// Slice from the first `{` to the last `}`.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
