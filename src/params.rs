//! Boundary parsing for caller-supplied strings
//!
//! Front-ends (CLI flags, the shell, an HTTP layer) hand raw text to these
//! functions before anything reaches the engine.

use crate::error::{EngineError, Result};

/// Values accepted as `true` by [`parse_flag`], compared case-insensitively
pub const TRUE_VALUES: &[&str] = &["true", "1", "yes", "on"];

/// Values accepted as `false` by [`parse_flag`], compared case-insensitively
pub const FALSE_VALUES: &[&str] = &["false", "0", "no", "off"];

/// Parse a boolean flag
///
/// Accepts the words in [`TRUE_VALUES`] and [`FALSE_VALUES`] in any case,
/// surrounding whitespace ignored.
///
/// # Errors
/// Returns `InvalidInput` for anything else, including the empty string.
///
/// # Examples
/// ```
/// use anagram_index::params::parse_flag;
///
/// assert!(parse_flag("True").unwrap());
/// assert!(!parse_flag("0").unwrap());
/// assert!(parse_flag("maybe").is_err());
/// ```
pub fn parse_flag(value: &str) -> Result<bool> {
    let normalized = value.trim().to_ascii_lowercase();

    if TRUE_VALUES.contains(&normalized.as_str()) {
        Ok(true)
    } else if FALSE_VALUES.contains(&normalized.as_str()) {
        Ok(false)
    } else {
        Err(EngineError::invalid(format!(
            "'{value}' is not a boolean (expected one of {} or {})",
            TRUE_VALUES.join("/"),
            FALSE_VALUES.join("/")
        )))
    }
}

/// Parse a result limit
///
/// Negative numbers mean "no limit" and map to `None`; `0` is a real limit
/// that returns nothing.
///
/// # Errors
/// Returns `InvalidInput` if the value is not an integer.
pub fn parse_limit(value: &str) -> Result<Option<usize>> {
    let limit: i64 = value
        .trim()
        .parse()
        .map_err(|_| EngineError::invalid(format!("limit '{value}' is not an integer")))?;

    Ok(usize::try_from(limit).ok())
}

/// Parse a strictly positive integer such as a page number or page size
///
/// # Errors
/// Returns `InvalidInput` if the value is not an integer of at least 1.
pub fn parse_positive(name: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(number) if number >= 1 => Ok(number),
        _ => Err(EngineError::invalid(format!(
            "{name} must be a positive integer, got '{value}'"
        ))),
    }
}
