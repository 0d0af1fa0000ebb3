use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use std::fmt::Write;

pub fn header(text: &str) {
    println!("{} {}", Icons::STATS, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

/// Quoted display form of a text value.
///
/// Single quotes unless the text contains `'` and no `"`. Backslashes, the
/// chosen quote and control characters are escaped.
pub fn quoted(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() && (c as u32) <= 0xff => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

pub fn stored_line(name: &str, body: &str) -> String {
    format!("Stored {} as {}", quoted(body), quoted(name))
}

pub fn retrieved_line(body: Option<&str>) -> String {
    match body {
        Some(body) => format!("Retrieved snippet: {}", quoted(body)),
        None => "Retrieved snippet: None".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_plain() {
        assert_eq!(quoted("cat bash.txt | sh"), "'cat bash.txt | sh'");
        assert_eq!(quoted(""), "''");
    }

    #[test]
    fn test_quoted_switches_quote_char() {
        assert_eq!(quoted("it's"), "\"it's\"");
        assert_eq!(quoted(r#"say "hi""#), r#"'say "hi"'"#);
        assert_eq!(quoted(r#"it's "x""#), r#"'it\'s "x"'"#);
    }

    #[test]
    fn test_quoted_escapes_controls() {
        assert_eq!(quoted("a\nb\tc"), r"'a\nb\tc'");
        assert_eq!(quoted(r"C:\tmp"), r"'C:\\tmp'");
        assert_eq!(quoted("a\u{85}b"), r"'a\x85b'");
        assert_eq!(quoted("\u{9f}\u{7f}"), r"'\x9f\x7f'");
        assert_eq!(quoted("\u{1b}"), r"'\x1b'");
    }

    #[test]
    fn test_result_lines() {
        assert_eq!(
            stored_line("shell", "cat bash.txt | sh"),
            "Stored 'cat bash.txt | sh' as 'shell'"
        );
        assert_eq!(
            retrieved_line(Some("cat bash.txt | sh")),
            "Retrieved snippet: 'cat bash.txt | sh'"
        );
        assert_eq!(retrieved_line(None), "Retrieved snippet: None");
    }
}
