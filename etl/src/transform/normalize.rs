//! String cleanups applied to archive fields.
//!
//! - [`simplify_season`] - `1842-43` to `1842`
//! - [`clean_date`] - `1842-12-07T00:00:00` to `1842-12-07`
//! - [`extract_composer_name`] - `Beethoven, Ludwig van` to `Beethoven`
//! - [`extract_text`] - element text with the `"NA"` default

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ExtractError, ExtractResult};
use crate::models::MISSING_VALUE;
use crate::parser::Element;

static SEASON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-[0-9]{2}").expect("season pattern is valid"));

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date pattern is valid"));

// Lazy prefix up to the first comma, or the first bracket with an optional
// space in front of it.
static COMPOSER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(.*?)(?:,| ?\[)").expect("composer pattern is valid"));

/// Reduce a season label to its leading year.
///
/// # Errors
///
/// [`ExtractError::MalformedDate`] if the value does not start with `YYYY-YY`.
pub fn simplify_season(season: &str) -> ExtractResult<String> {
    SEASON_RE
        .captures(season)
        .and_then(|caps| caps.get(1))
        .map(|year| year.as_str().to_string())
        .ok_or_else(|| ExtractError::MalformedDate(season.to_string()))
}

/// Keep the leading `YYYY-MM-DD` of a timestamp.
///
/// # Errors
///
/// [`ExtractError::MalformedDate`] if the value does not start with a date.
pub fn clean_date(date: &str) -> ExtractResult<String> {
    DATE_RE
        .find(date)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ExtractError::MalformedDate(date.to_string()))
}

/// Keep the surname part of a composer string and escape apostrophes.
///
/// The apostrophe escaping (`'` to `\'`) keeps values safe for quoted SQL
/// literals downstream.
pub fn extract_composer_name(raw: &str) -> String {
    let surname = COMPOSER_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str());

    surname.replace('\'', "\\'")
}

/// Text of an optional element, [`MISSING_VALUE`] when the element is absent.
///
/// A present but empty element yields an empty string.
pub fn extract_text(element: Option<&Element>) -> String {
    match element {
        None => MISSING_VALUE.to_string(),
        Some(el) => el.text().unwrap_or_default().to_string(),
    }
}
