//! Display Formatting

use chrono::NaiveDate;

/// `$1000.00` style money, always two decimals. Infinite amounts render
/// as `$∞` / `$-∞`.
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", symbol, sign);
    }
    format!("{}{:.2}", symbol, amount)
}

/// `15 May 2024`, used in the expense list
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// `May 15`, used for chart labels
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

/// `2024-05-15`, the value format of `<input type="date">`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Axis tick label: at most two decimals, trailing zeros dropped
pub fn format_tick(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(format_money(1000.0, "$"), "$1000.00");
        assert_eq!(format_money(4.5, "$"), "$4.50");
        assert_eq!(format_money(-5.0, "$"), "$-5.00");
        assert_eq!(format_money(f64::INFINITY, "$"), "$∞");
        assert_eq!(format_money(f64::NEG_INFINITY, "$"), "$-∞");
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(format_long_date(date), "05 Jun 2024");
        assert_eq!(format_short_date(date), "Jun 05");
        assert_eq!(format_iso_date(date), "2024-06-05");
    }

    #[test]
    fn test_ticks() {
        assert_eq!(format_tick(100.0), "100");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.30000000000000004), "0.3");
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(-0.0), "0");
    }
}
