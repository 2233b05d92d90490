use crate::process::raw_row::CellValue;
use crate::process::utils::clean_value;
use chrono::{NaiveTime, Timelike};

/// Normalize a meeting-time cell to `HH:MM AM/PM`.
///
/// Typed times are formatted directly; text is parsed as either a 12-hour
/// (`"9:00 am"`, `"09:00:00 PM"`) or 24-hour (`"13:30"`, `"13:30:00"`) clock.
/// Text that can't be parsed is returned trimmed but otherwise as-is.
pub fn normalize_time(value: &CellValue) -> Option<String> {
    match clean_value(value)? {
        CellValue::Time(t) => Some(format_12h(t.hour(), t.minute())),
        other => normalize_time_str(&other.to_text()),
    }
}

/// Text flavour of [`normalize_time`].
pub fn normalize_time_str(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("nan") || s.eq_ignore_ascii_case("none") {
        return None;
    }

    let upper = s.to_ascii_uppercase();
    let parsed = if upper.contains("AM") || upper.contains("PM") {
        parse_12h(&upper)
    } else {
        parse_24h(s)
    };
    Some(parsed.unwrap_or_else(|| s.to_string()))
}

fn format_12h(hour: u32, minute: u32) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{:02}:{:02} {}", hour, minute, period)
}

/// Leading `H:MM` of a `H:MM[:SS]` string; seconds are ignored.
fn hour_minute(time_part: &str) -> Option<(u32, u32)> {
    let mut parts = time_part.split(':');
    let hour = parts.next()?.trim().parse::<u32>().ok()?;
    let minute = parts.next()?.trim().parse::<u32>().ok()?;
    Some((hour, minute))
}

fn parse_12h(upper: &str) -> Option<String> {
    let tokens: Vec<&str> = upper.split_whitespace().collect();
    let (time_part, period) = match tokens.as_slice() {
        [] => return None,
        // "9:00PM": period glued onto the time
        [only] => {
            let idx = only.find(|c: char| c.is_ascii_alphabetic())?;
            (&only[..idx], &only[idx..])
        }
        [first, .., last] => (*first, *last),
    };

    let period = match period.replace('.', "").as_str() {
        "AM" => "AM",
        "PM" => "PM",
        _ => return None,
    };

    let (hour, minute) = hour_minute(time_part)?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }
    Some(format!("{:02}:{:02} {}", hour, minute, period))
}

fn parse_24h(s: &str) -> Option<String> {
    if !s.contains(':') {
        return None;
    }
    let (hour, minute) = hour_minute(s)?;
    let t = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(format_12h(t.hour(), t.minute()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> Option<String> {
        normalize_time_str(s)
    }

    #[test]
    fn twenty_four_hour_text() {
        assert_eq!(norm("13:30:00").as_deref(), Some("01:30 PM"));
        assert_eq!(norm("00:15").as_deref(), Some("12:15 AM"));
        assert_eq!(norm("12:00").as_deref(), Some("12:00 PM"));
        assert_eq!(norm("9:05").as_deref(), Some("09:05 AM"));
        assert_eq!(norm(" 23:59 ").as_deref(), Some("11:59 PM"));
    }

    #[test]
    fn twelve_hour_text() {
        assert_eq!(norm("9:00 am").as_deref(), Some("09:00 AM"));
        assert_eq!(norm("1:30:00 PM").as_deref(), Some("01:30 PM"));
        assert_eq!(norm("  10:45    pm ").as_deref(), Some("10:45 PM"));
        assert_eq!(norm("9:00PM").as_deref(), Some("09:00 PM"));
        assert_eq!(norm("9:00 p.m.").as_deref(), Some("09:00 PM"));
    }

    #[test]
    fn canonical_form_is_stable() {
        assert_eq!(norm("09:00 AM").as_deref(), Some("09:00 AM"));
        let once = norm("14:10").unwrap();
        assert_eq!(norm(&once), Some(once.clone()));
    }

    #[test]
    fn missing_like_text_is_absent() {
        assert_eq!(norm(""), None);
        assert_eq!(norm("   "), None);
        assert_eq!(norm("NaN"), None);
        assert_eq!(norm("None"), None);
    }

    #[test]
    fn unparseable_text_comes_back_unchanged() {
        assert_eq!(norm("TBA").as_deref(), Some("TBA"));
        assert_eq!(norm("ab:cd").as_deref(), Some("ab:cd"));
        assert_eq!(norm("25:00").as_deref(), Some("25:00"));
        assert_eq!(norm("xx:00 PM").as_deref(), Some("xx:00 PM"));
        assert_eq!(norm("Arranged AM").as_deref(), Some("Arranged AM"));
    }

    #[test]
    fn typed_times() {
        let t = |h, m| CellValue::Time(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        assert_eq!(normalize_time(&t(0, 0)).as_deref(), Some("12:00 AM"));
        assert_eq!(normalize_time(&t(12, 30)).as_deref(), Some("12:30 PM"));
        assert_eq!(normalize_time(&t(17, 5)).as_deref(), Some("05:05 PM"));
        assert_eq!(normalize_time(&CellValue::Missing), None);
        assert_eq!(normalize_time(&CellValue::Number(f64::NAN)), None);
    }
}
