//! Number formatting for tables and metric cards.
//!
//! Amounts are Vietnamese dong: no fraction digits, `.` between thousand groups
//! and a trailing `₫`, the way `Intl.NumberFormat('vi-VN')` renders them.

/// Inserts `sep` between groups of three digits of the integer part.
///
/// ```
/// # use frontend::shared::number_format::group_thousands;
/// assert_eq!(group_thousands(1234567, '.'), "1.234.567");
/// ```
pub fn group_thousands(value: i64, sep: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Money in dong, e.g. `1234567.4` -> `"1.234.567 ₫"`.
pub fn format_vnd(value: f64) -> String {
    format!("{} ₫", group_thousands(value.round() as i64, '.'))
}

/// Plain integer count with grouping, e.g. `"12.500"`.
pub fn format_count(value: i64) -> String {
    group_thousands(value, '.')
}

/// Share of `part` in `whole` as a whole percentage; zero when `whole` is zero.
pub fn format_percent(part: f64, whole: f64) -> String {
    if whole <= 0.0 {
        return "0%".to_string();
    }
    format!("{:.0}%", part / whole * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(1234567, ' '), "1 234 567");
        assert_eq!(group_thousands(-1234, '.'), "-1.234");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(1234567.4), "1.234.567 ₫");
        assert_eq!(format_vnd(0.0), "0 ₫");
        assert_eq!(format_vnd(99.5), "100 ₫");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(25.0, 200.0), "13%");
        assert_eq!(format_percent(5.0, 0.0), "0%");
    }
}
