/// Strips the code-fence wrapping models like to emit, leaving bare source.
///
/// Each rule applies at most once and only at the string's trimmed edges;
/// fences in the middle of the code are left alone. The result is not
/// validated as Python; malformed code surfaces later as a render failure.
pub fn clean_code_response(raw: &str) -> String {
    let mut code = raw.trim();
    code = code.strip_prefix("```python").unwrap_or(code);
    code = code.strip_prefix("```").unwrap_or(code);
    code = code.strip_suffix("```").unwrap_or(code);
    code.trim().to_string()
}
