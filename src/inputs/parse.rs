//! String cleanup for numeric form fields
//!
//! Form values arrive decorated ("10,000", "$2,500", "7.5%"). All separator
//! stripping happens here, once, before validation; the projection math only
//! ever sees plain `f64`s.

/// Parse a money amount such as `"10,000"`, `"$2,500.50"` or `"1_000"`
///
/// Returns `None` when nothing numeric is left after cleanup.
pub fn parse_money(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_prefix('$').unwrap_or(trimmed);
    parse_cleaned(bare, &[',', '_'])
}

/// Parse an annual rate in percent such as `"7"`, `"7.5%"` or `"1,000"`
pub fn parse_rate(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let bare = trimmed.strip_suffix('%').unwrap_or(trimmed);
    parse_cleaned(bare, &[','])
}

/// Parse a year count; decimals truncate toward zero (`"10.9"` -> 10)
pub fn parse_years(raw: &str) -> Option<i64> {
    let cleaned = strip_separators(raw, &[',', '_']);
    if let Ok(whole) = cleaned.parse::<i64>() {
        return Some(whole);
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|years| years.is_finite())
        .map(|years| years.trunc() as i64)
}

fn parse_cleaned(raw: &str, separators: &[char]) -> Option<f64> {
    let cleaned = strip_separators(raw, separators);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

fn strip_separators(raw: &str, separators: &[char]) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !separators.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_grouping_separators() {
        assert_eq!(parse_money("10,000"), Some(10_000.0));
        assert_eq!(parse_money("1,234,567.89"), Some(1_234_567.89));
        assert_eq!(parse_money(" $2,500.50 "), Some(2_500.5));
        assert_eq!(parse_money("1_000"), Some(1_000.0));
        assert_eq!(parse_money("-50"), Some(-50.0));
    }

    #[test]
    fn test_money_unparsable() {
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("   "), None);
        assert_eq!(parse_money("$"), None);
        assert_eq!(parse_money("ten thousand"), None);
    }

    #[test]
    fn test_rate_decorations() {
        assert_eq!(parse_rate("7"), Some(7.0));
        assert_eq!(parse_rate("7.5%"), Some(7.5));
        assert_eq!(parse_rate(" 12 % "), Some(12.0));
        assert_eq!(parse_rate("1,000"), Some(1_000.0));
        assert_eq!(parse_rate("seven"), None);
        assert_eq!(parse_rate("%"), None);
    }

    #[test]
    fn test_years() {
        assert_eq!(parse_years("10"), Some(10));
        assert_eq!(parse_years(" 25 "), Some(25));
        assert_eq!(parse_years("10.9"), Some(10));
        assert_eq!(parse_years("1,000"), Some(1_000));
        assert_eq!(parse_years("-3"), Some(-3));
        assert_eq!(parse_years("abc"), None);
        assert_eq!(parse_years("inf"), None);
        assert_eq!(parse_years(""), None);
    }
}
