//! Integer literal formatting and parsing

use num_traits::Num;

/// Format an integer the way operand tokens display it: lowercase hex with a
/// `0x` prefix.
pub fn format_hex(value: u64) -> String {
    format!("{:#x}", value)
}

/// Parse a hexadecimal literal, with or without the `0x` prefix.
///
/// `$`-prefixed literals are accepted as well, since that is how addresses
/// are usually typed on the command line by people coming from 8-bit
/// assemblers.
pub fn parse_hex<T>(s: &str) -> Option<T>
where
    T: Num,
{
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'))
        .unwrap_or(s);

    if digits.is_empty() {
        return None;
    }

    T::from_str_radix(digits, 16).ok()
}

/// Parse an address as a user would type it: hex with a `0x` or `$` prefix,
/// decimal otherwise.
pub fn parse_address(s: &str) -> Option<u64> {
    let s = s.trim();

    if s.starts_with("0x") || s.starts_with("0X") || s.starts_with('$') {
        parse_hex(s)
    } else {
        s.parse().ok()
    }
}
