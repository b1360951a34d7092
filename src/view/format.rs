use chrono::{DateTime, NaiveDateTime};

const DESCRIPTION_MAX_CHARS: usize = 150;

/// `12000` → `12,000`, `1234.5` → `1,234.5` (at most three decimals).
pub(crate) fn format_count(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }

    let fixed = format!("{:.3}", v.abs());
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (trimmed, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if v < 0.0 && trimmed != "0" { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Whole numbers without a trailing `.0`.
pub(crate) fn format_plain(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

/// `2024-03-05T14:30:00` → `Mar 5, 02:30 PM`. Unknown formats are shown as sent.
pub(crate) fn format_published(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));

    match parsed {
        Ok(dt) => dt.format("%b %-d, %I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub(crate) fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_MAX_CHARS {
        return description.to_string();
    }
    let head: String = description.chars().take(DESCRIPTION_MAX_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1000.0), "1,000");
        assert_eq!(format_count(1234567.0), "1,234,567");
        assert_eq!(format_count(-4321.0), "-4,321");
    }

    #[test]
    fn test_format_count_keeps_short_fractions() {
        assert_eq!(format_count(1234.5), "1,234.5");
        assert_eq!(format_count(87.25), "87.25");
        assert_eq!(format_count(0.12345), "0.123");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(42.0), "42");
        assert_eq!(format_plain(2.5), "2.5");
    }

    #[test]
    fn test_format_published_variants() {
        assert_eq!(format_published("2024-03-05T14:30:00"), "Mar 5, 02:30 PM");
        assert_eq!(format_published("2024-12-25T09:05:00.123456"), "Dec 25, 09:05 AM");
        assert_eq!(format_published("2024-01-10T23:59:00+00:00"), "Jan 10, 11:59 PM");
        assert_eq!(format_published("yesterday"), "yesterday");
    }

    #[test]
    fn test_truncate_description_counts_chars() {
        assert_eq!(truncate_description("short"), "short");
        let long = "é".repeat(151);
        let out = truncate_description(&long);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 153);
    }
}
