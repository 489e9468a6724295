//! Inbound line parsing
//!
//! Line format:
//! - `<key>=<number>`: value update (sliders, joysticks, orientation)
//! - `<key>`: key pressed
//! - `!<key>`: key released
//! - `none`: every key released
//!
//! Parsing never fails. A payload that is not a number becomes NaN and is
//! still delivered, so legacy keys with non-numeric payloads keep working.

use crate::keys::CLEAR_ALL;

/// Maximum key length the device keeps track of
pub const MAX_KEY_LEN: usize = 32;

/// Prefix marking a release event
const RELEASE_PREFIX: char = '!';

/// Value recorded for a pressed key
const PRESSED_VALUE: f64 = 1.0;

/// Value recorded for a release or clear-all event
const RELEASED_VALUE: f64 = 0.0;

/// A classified inbound line
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParsedCommand<'a> {
    /// `key=value` update
    Value { key: &'a str, value: f64 },
    /// Key pressed
    Press { key: &'a str },
    /// Key released
    Release { key: &'a str },
    /// All keys released at once
    ReleaseAll,
    /// Nothing to act on (blank line or empty key)
    Empty,
}

impl<'a> ParsedCommand<'a> {
    /// Key this command is dispatched under
    ///
    /// A clear-all event is dispatched under its sentinel key `none`.
    pub fn key(&self) -> Option<&'a str> {
        match self {
            ParsedCommand::Value { key, .. }
            | ParsedCommand::Press { key }
            | ParsedCommand::Release { key } => Some(key),
            ParsedCommand::ReleaseAll => Some(CLEAR_ALL),
            ParsedCommand::Empty => None,
        }
    }

    /// Value queued for dispatch
    ///
    /// Presses dispatch `1`, releases and clear-all dispatch `0`.
    pub fn value(&self) -> Option<f64> {
        match self {
            ParsedCommand::Value { value, .. } => Some(*value),
            ParsedCommand::Press { .. } => Some(PRESSED_VALUE),
            ParsedCommand::Release { .. } | ParsedCommand::ReleaseAll => Some(RELEASED_VALUE),
            ParsedCommand::Empty => None,
        }
    }

    /// Returns true if this is a press, release or clear-all event
    pub fn is_key_event(&self) -> bool {
        matches!(
            self,
            ParsedCommand::Press { .. } | ParsedCommand::Release { .. } | ParsedCommand::ReleaseAll
        )
    }
}

/// Parse one line received from the app
pub fn parse(line: &str) -> ParsedCommand<'_> {
    let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');

    if let Some((key, raw)) = line.split_once('=') {
        if key.is_empty() {
            return ParsedCommand::Empty;
        }
        return ParsedCommand::Value {
            key,
            value: parse_number(raw),
        };
    }

    if let Some(key) = line.strip_prefix(RELEASE_PREFIX) {
        if key.is_empty() {
            return ParsedCommand::Empty;
        }
        return ParsedCommand::Release { key };
    }

    match line {
        "" => ParsedCommand::Empty,
        CLEAR_ALL => ParsedCommand::ReleaseAll,
        key => ParsedCommand::Press { key },
    }
}

/// Parse the longest numeric prefix of `raw`
///
/// Leading whitespace is skipped and trailing garbage ignored (`"12abc"` is
/// 12). Returns NaN when no digits are found.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_never_panics(line in "\\PC*") {
            let _ = parse(&line);
        }

        #[test]
        fn integers_parse_exactly(n in -100_000i32..100_000) {
            let mut buf = heapless::String::<16>::new();
            core::fmt::Write::write_fmt(&mut buf, format_args!("k={}", n)).unwrap();
            prop_assert_eq!(parse(&buf), ParsedCommand::Value { key: "k", value: n as f64 });
        }
    }
}
