/**
 * Defensive JSON Extraction
 *
 * The generative model is asked for a bare JSON object but may wrap it
 * in Markdown code fences or explanatory prose. This module isolates the
 * first top-level balanced `{...}` span with a bracket-depth scan that
 * is aware of string literals and escapes, with fence stripping as the
 * fallback when no balanced span exists.
 */

/// Extract the first balanced top-level JSON object from `raw`.
///
/// The scan tracks brace depth outside of string literals, so braces
/// inside values (`{"a": "}{"}`) do not confuse it. Returns `None` when
/// no opening brace is found or the braces never balance.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in raw[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..=start + i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Strip Markdown code fences from model output.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}
