//! Numeric coercions for fields the sources store as display text.

use wcup_model::SourceTable;

use crate::error::{NormalizeError, Result};

/// Strips `.` thousands separators (`"590.549"` -> `"590549"`).
///
/// The archive renders large counts with periods as grouping marks, never
/// as decimal points.
pub fn strip_grouping_separators(value: &str) -> String {
    value.replace('.', "")
}

/// Parses a trimmed base-10 integer. Blank input is absent, not zero.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Integer parse with an integral-float fallback for exports that render
/// counts as `"93000.0"`.
pub fn parse_i64_lenient(value: &str) -> Option<i64> {
    if let Some(parsed) = parse_i64(value) {
        return Some(parsed);
    }
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed as i64),
        _ => None,
    }
}

/// Required integer field; failure invalidates the whole table.
pub(crate) fn coerce_i64(table: SourceTable, column: &str, value: Option<&str>) -> Result<i64> {
    let raw = value.unwrap_or("");
    parse_i64(raw).ok_or_else(|| NormalizeError::FieldCoercion {
        table,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Required calendar year: one to four ASCII digits.
pub(crate) fn coerce_year(table: SourceTable, value: Option<&str>) -> Result<i32> {
    let raw = value.unwrap_or("");
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.len() <= 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(year) = trimmed.parse::<i32>() {
            return Ok(year);
        }
    }
    Err(NormalizeError::FieldCoercion {
        table,
        column: "Year".to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_separators_strip_to_plain_digits() {
        assert_eq!(strip_grouping_separators("1.337.000"), "1337000");
        assert_eq!(parse_i64(&strip_grouping_separators("1.337.000")), Some(1_337_000));
        assert_eq!(strip_grouping_separators("590549"), "590549");
    }

    #[test]
    fn blank_cells_parse_as_absent() {
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("   "), None);
        assert_eq!(parse_i64_lenient(" "), None);
    }

    #[test]
    fn lenient_parse_accepts_float_renderings() {
        assert_eq!(parse_i64_lenient("93000"), Some(93_000));
        assert_eq!(parse_i64_lenient("93000.0"), Some(93_000));
        assert_eq!(parse_i64_lenient("93000.75"), Some(93_000));
        assert_eq!(parse_i64_lenient("full house"), None);
        assert_eq!(parse_i64_lenient("NaN"), None);
    }

    #[test]
    fn years_are_short_digit_runs() {
        assert_eq!(
            coerce_year(SourceTable::Editions, Some("1930")).unwrap(),
            1930
        );
        assert_eq!(coerce_year(SourceTable::Editions, Some(" 1930 ")).unwrap(), 1930);
        assert!(coerce_year(SourceTable::Editions, Some("19300")).is_err());
        assert!(coerce_year(SourceTable::Editions, Some("193O")).is_err());
        assert!(coerce_year(SourceTable::Editions, Some("")).is_err());
        assert!(coerce_year(SourceTable::Editions, None).is_err());
    }

    #[test]
    fn required_integers_fail_loudly() {
        assert_eq!(
            coerce_i64(SourceTable::Editions, "GoalsScored", Some("70")).unwrap(),
            70
        );
        let err = coerce_i64(SourceTable::Editions, "GoalsScored", Some("many")).unwrap_err();
        assert!(err.to_string().contains("GoalsScored"));
        assert!(err.to_string().contains("'many'"));
    }
}
