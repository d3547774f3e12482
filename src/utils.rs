// src/utils.rs
use chrono::NaiveDate;

pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_currency(value: u64) -> String {
    format!("${}", format_thousands(value))
}

pub fn format_aud(value: u64) -> String {
    format!("A${}", format_thousands(value))
}

/// `1_650_000` with 2 decimals -> `A$1.65M`
pub fn format_millions(value: f64, decimals: usize) -> String {
    format!("A${:.*}M", decimals, value / 1_000_000.0)
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_score(value: f64) -> String {
    format!("{:.0}", value)
}

/// Short en-AU date, e.g. `1 Jan 2020`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(2_800_000), "2,800,000");
        assert_eq!(format_thousands(85_417), "85,417");
    }

    #[test]
    fn money_formats() {
        assert_eq!(format_currency(500_000), "$500,000");
        assert_eq!(format_aud(3_595_034), "A$3,595,034");
        assert_eq!(format_millions(1_650_000.0, 2), "A$1.65M");
        assert_eq!(format_millions(25_000_000.0, 0), "A$25M");
    }

    #[test]
    fn percentage_and_score() {
        assert_eq!(format_percentage(7.9), "7.9%");
        assert_eq!(format_percentage(18.76), "18.8%");
        assert_eq!(format_score(72.4), "72");
    }

    #[test]
    fn short_dates() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(format_date(date), "1 Jan 2020");
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_date(date), "18 Oct 2026");
    }
}
