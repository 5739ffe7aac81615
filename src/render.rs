//! Output formats for resolved identifiers
//!
//! Line-oriented formats escape values so every entry stays on one line.
//! The properties format follows `java.util.Properties` escaping, so a Java
//! harness can `load` it back unchanged.

use crate::config::Resolved;
use std::fmt::Write;

/// `key = value (origin)` lines, with control characters escaped
pub fn render_text(resolved: &[Resolved]) -> String {
    resolved
        .iter()
        .map(|r| format!("{} = {} ({})\n", r.key, escape_control(&r.value), r.origin))
        .collect()
}

/// `key=value` lines in `.properties` syntax
pub fn render_properties(resolved: &[Resolved]) -> String {
    resolved
        .iter()
        .map(|r| {
            format!(
                "{}={}\n",
                escape_property(&r.key, true),
                escape_property(&r.value, false)
            )
        })
        .collect()
}

pub fn render_json(resolved: &[Resolved]) -> serde_json::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(resolved)?))
}

fn escape_control(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Escape a key or value the way `Properties.store` writes it
///
/// Keys escape every space; values only a leading one.
fn escape_property(text: &str, is_key: bool) -> String {
    let mut escaped = String::with_capacity(text.len());

    for (index, c) in text.chars().enumerate() {
        match c {
            ' ' if index == 0 || is_key => escaped.push_str("\\ "),
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\x0c' => escaped.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_control() => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(escaped, "\\u{:04X}", unit);
                }
            }
            c => escaped.push(c),
        }
    }

    escaped
}
