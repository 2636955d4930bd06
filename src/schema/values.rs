//! Cell cleaning for API values. The Census API reports suppressed or
//! non-applicable cells with sentinel codes and annotation tokens rather than
//! leaving them empty.

/// Sentinels for suppressed estimates, with the `.0` forms some vintages emit.
const SUPPRESS_CODES: &[&str] = &[
    "-555555555",
    "-555555555.0",
    "-888888888",
    "-888888888.0",
    "-666666666",
    "-666666666.0",
    "-222222222",
    "-222222222.0",
];

const ANNOTATION_TOKENS: &[&str] = &["", "(X)", "*****", "-", "**"];

/// Parse one raw cell, mapping suppression codes and annotations to `None`.
pub fn clean_cell(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if SUPPRESS_CODES.contains(&s) || ANNOTATION_TOKENS.contains(&s) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Render a value for output, dropping the fractional part when integral.
pub fn format_value(v: f64) -> String {
    let rounded = v.round();
    if (v - rounded).abs() < 1e-9 {
        format!("{}", rounded as i64)
    } else {
        v.to_string()
    }
}
