use chrono::{DateTime, Local, NaiveDateTime};

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Call-time timestamp for column A.
pub fn now() -> String {
    format(Local::now())
}

pub fn format(at: DateTime<Local>) -> String {
    at.format(STAMP_FORMAT).to_string()
}

pub fn format_naive(at: NaiveDateTime) -> String {
    at.format(STAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn stamp_matches_sheet_format() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(format_naive(at), "2024-01-01 10:00:00");
    }

    #[test]
    fn now_is_nineteen_chars() {
        let stamp = now();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[13..14], ":");
    }
}
