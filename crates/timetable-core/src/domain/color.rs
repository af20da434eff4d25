//! Hexadecimal colour checks used by subjects and slots.

use std::sync::LazyLock;

use regex::Regex;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex colour pattern is valid")
});

/// `true` iff `value` is `#` followed by exactly 3 or 6 hexadecimal digits.
///
/// `None` and the empty string are never valid. RGB, HSL or CMYK notations
/// (`255,87,51`, `11,80%,60%`, ...) are rejected.
pub fn is_hex(value: Option<&str>) -> bool {
    match value {
        Some(v) if !v.is_empty() => HEX_COLOR.is_match(v),
        _ => false,
    }
}
