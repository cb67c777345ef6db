//! Defensive cleanup of untrusted model output.
//!
//! The model is instructed not to number its own outputs (numbering is
//! the renderer's job); the circled-numeral stripper is the safety net
//! for non-compliance. The coercion helpers collapse the model's
//! maybe-list-maybe-string-maybe-absent fields into fixed shapes so no
//! downstream reader ever sees a null.

use serde_json::Value;

/// Circled digits and related enclosed-numeral ranges: ①–⑳ plus the
/// double-circled and negative-circled blocks.
fn is_circled(c: char) -> bool {
    matches!(c,
        '\u{2460}'..='\u{2473}' | '\u{24F5}'..='\u{24FE}' | '\u{2776}'..='\u{277F}')
}

/// Remove circled numerals and collapse runs of two or more whitespace
/// characters into a single space, then trim. Idempotent.
#[must_use]
pub fn strip_circled(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_ws: Option<char> = None;
    let mut ws_run = 0usize;

    for c in text.chars().filter(|c| !is_circled(*c)) {
        if c.is_whitespace() {
            ws_run += 1;
            pending_ws = Some(c);
        } else {
            match ws_run {
                0 => {}
                1 => out.push(pending_ws.unwrap_or(' ')),
                _ => out.push(' '),
            }
            ws_run = 0;
            pending_ws = None;
            out.push(c);
        }
    }
    out.trim().to_string()
}

/// String coercion: strings pass through, numbers render, everything
/// else (including absence) becomes empty.
#[must_use]
pub fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// List coercion: arrays keep their string/number entries, a bare string
/// becomes a one-element list, everything else is empty. Blank entries
/// are dropped.
#[must_use]
pub fn coerce_list(value: Option<&Value>) -> Vec<String> {
    let items: Vec<String> = match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_string(Some(item)))
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    };
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Numeric coercion: numbers pass through, numeric strings parse,
/// everything else is `None`.
#[must_use]
pub fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_circled_digits() {
        assert_eq!(strip_circled("① logo too small"), "logo too small");
        assert_eq!(strip_circled("risk ⑳ here"), "risk here");
        assert_eq!(strip_circled("❶ negative ❿"), "negative");
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_circled("①  two   spaces ② left");
        let twice = strip_circled(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "two spaces left");
    }

    #[test]
    fn plain_text_is_untouched_beyond_whitespace_collapse() {
        assert_eq!(strip_circled("already clean"), "already clean");
        assert_eq!(strip_circled("a\nb"), "a\nb");
        assert_eq!(strip_circled("a\n\nb"), "a b");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_circled(""), "");
        assert_eq!(strip_circled("   "), "");
    }

    #[test]
    fn coerce_string_handles_shapes() {
        assert_eq!(coerce_string(Some(&json!("text"))), "text");
        assert_eq!(coerce_string(Some(&json!(42))), "42");
        assert_eq!(coerce_string(Some(&json!(["a"]))), "");
        assert_eq!(coerce_string(Some(&json!(null))), "");
        assert_eq!(coerce_string(None), "");
    }

    #[test]
    fn coerce_list_accepts_string_or_array() {
        assert_eq!(coerce_list(Some(&json!(["a", "b"]))), vec!["a", "b"]);
        assert_eq!(coerce_list(Some(&json!("solo"))), vec!["solo"]);
        assert_eq!(coerce_list(Some(&json!(["a", "", "  ", "b"]))), vec!["a", "b"]);
        assert!(coerce_list(Some(&json!(7))).is_empty());
        assert!(coerce_list(None).is_empty());
    }

    #[test]
    fn coerce_f64_parses_numeric_strings() {
        assert_eq!(coerce_f64(Some(&json!(1.5))), Some(1.5));
        assert_eq!(coerce_f64(Some(&json!("72"))), Some(72.0));
        assert_eq!(coerce_f64(Some(&json!("abc"))), None);
        assert_eq!(coerce_f64(None), None);
    }
}
