//! Display formatting helpers.
//!
//! Small string utilities shared by the playground, the generated docs and
//! the CLI output.

use crate::js_number;

/// Turn a camelCase or snake_case identifier into Title Case.
///
/// Every uppercase ASCII letter starts a new word and underscores become
/// spaces; only the very first letter is capitalised.
///
/// ```
/// use tumbler_carton::format::to_title_case;
///
/// assert_eq!(to_title_case("colorScheme"), "Color Scheme");
/// assert_eq!(to_title_case("font_size"), "Font size");
/// ```
pub fn to_title_case(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
            spaced.push(c);
        } else if c == '_' {
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
    }

    let mut chars = spaced.chars();
    let capitalised: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    capitalised.trim().to_string()
}

/// Format a number with thousands separators (en-US grouping, up to three
/// fraction digits).
pub fn format_number(num: f64) -> String {
    if !num.is_finite() {
        return js_number(num);
    }

    let fixed = format!("{:.3}", num.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if num < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Truncate `s` to at most `max_len` characters, ending with `suffix` when
/// anything was cut.
pub fn truncate(s: &str, max_len: usize, suffix: &str) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let keep = max_len.saturating_sub(suffix.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

const BYTE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human-readable byte size using binary (1024) steps.
///
/// ```
/// use tumbler_carton::format::format_bytes;
///
/// assert_eq!(format_bytes(0, 2), "0 Bytes");
/// assert_eq!(format_bytes(1536, 2), "1.5 KB");
/// ```
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && index < BYTE_UNITS.len() - 1 {
        scaled /= 1024.0;
        index += 1;
    }

    let fixed = format!("{:.*}", decimals, scaled);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    format!("{} {}", trimmed, BYTE_UNITS[index])
}

/// Convert string to PascalCase.
#[inline]
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Lowercase, dash-separated slug for file names and anchors.
pub fn slugify(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
