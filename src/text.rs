//! Text utilities consumed by the reporter: the alignment primitive, the
//! stack-line splitter, the plain-object predicate and the general
//! stringifier.

use crate::reporter::Alignment;
use console::Style;
use serde_json::Value;

/// Pad `text` with spaces to at least `width` characters.
///
/// `Alignment::Left` pads on the right, `Alignment::Right` pads on the
/// left. No-op when `text` is already at least `width` wide; never
/// truncates.
pub fn pad(side: Alignment, text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let fill = " ".repeat(width - len);
    match side {
        Alignment::Left => format!("{}{}", text, fill),
        Alignment::Right => format!("{}{}", fill, text),
    }
}

/// Split a raw stack dump into per-frame lines, trimmed, empties dropped.
///
/// Purely textual; frame semantics (file/line/column) are not parsed.
pub fn parse_stack(stack: &str) -> Vec<&str> {
    stack
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// True for ordinary key-value data objects only. Arrays, scalars and
/// null are not plain objects.
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

/// General-purpose human-readable stringifier.
///
/// Strings render verbatim, scalars get ANSI styling when `colors` is
/// set, everything else falls back to compact JSON. The caller resolves
/// the `colors` capability once at construction and threads it through.
pub fn stringify(value: &Value, colors: bool) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(_) | Value::Bool(_) | Value::Null => {
            if colors {
                Style::new()
                    .yellow()
                    .force_styling(true)
                    .apply_to(value)
                    .to_string()
            } else {
                value.to_string()
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pad_left_appends_spaces() {
        assert_eq!(pad(Alignment::Left, "ab", 5), "ab   ");
        assert_eq!(pad(Alignment::Right, "ab", 5), "   ab");
    }

    #[test]
    fn pad_is_noop_at_or_past_width() {
        assert_eq!(pad(Alignment::Left, "abcdef", 5), "abcdef");
        assert_eq!(pad(Alignment::Right, "abcde", 5), "abcde");
    }

    #[test]
    fn parse_stack_trims_and_drops_empties() {
        let stack = "Error: x\n    at f\n\n  at g\n";
        assert_eq!(parse_stack(stack), vec!["Error: x", "at f", "at g"]);
    }

    #[test]
    fn plain_object_predicate() {
        assert!(is_plain_object(&json!({ "a": 1 })));
        assert!(!is_plain_object(&json!([1, 2])));
        assert!(!is_plain_object(&json!("s")));
        assert!(!is_plain_object(&json!(null)));
    }

    #[test]
    fn stringify_renders_strings_verbatim() {
        assert_eq!(stringify(&json!("hello"), false), "hello");
    }

    #[test]
    fn stringify_scalars_without_colors() {
        assert_eq!(stringify(&json!(42), false), "42");
        assert_eq!(stringify(&json!(true), false), "true");
        assert_eq!(stringify(&json!(null), false), "null");
    }

    #[test]
    fn stringify_scalars_with_colors_wraps_in_ansi() {
        let out = stringify(&json!(42), true);
        assert!(out.contains("42"));
        assert!(out.starts_with('\u{1b}'));
    }

    #[test]
    fn stringify_arrays_fall_back_to_compact_json() {
        assert_eq!(stringify(&json!([1, "a"]), false), r#"[1,"a"]"#);
    }
}
