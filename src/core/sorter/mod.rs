//! # Sorter Module
//!
//! Orders scanned records for the contact sheet: dated photos first in
//! chronological order, undated photos after them in their original scan
//! order (the sort is stable and the key only distinguishes "has date" and
//! the date value).

use crate::core::scanner::ImageRecord;

/// Sort records by capture date ascending, undated records last
pub fn sort_by_capture_date(records: &mut [ImageRecord]) {
    records.sort_by_key(|r| (r.capture_date.is_none(), r.capture_date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::CaptureDate;
    use crate::core::scanner::ImageFormat;
    use chrono::TimeZone;
    use chrono::Utc;
    use std::path::PathBuf;

    fn record(name: &str, date: Option<CaptureDate>) -> ImageRecord {
        ImageRecord {
            filename: name.to_string(),
            path: PathBuf::from(name),
            format: ImageFormat::Jpeg,
            capture_date: date,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> CaptureDate {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn dated_records_sort_ascending() {
        let mut records = vec![
            record("c.jpg", Some(date(2023, 3, 1))),
            record("a.jpg", Some(date(2021, 1, 1))),
            record("b.jpg", Some(date(2022, 2, 1))),
        ];
        sort_by_capture_date(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn undated_records_sort_last() {
        let mut records = vec![
            record("undated.png", None),
            record("dated.jpg", Some(date(2023, 3, 1))),
        ];
        sort_by_capture_date(&mut records);

        assert_eq!(records[0].filename, "dated.jpg");
        assert_eq!(records[1].filename, "undated.png");
    }

    #[test]
    fn undated_records_keep_scan_order() {
        let mut records = vec![
            record("z.png", None),
            record("m.png", None),
            record("a.png", None),
            record("dated.jpg", Some(date(2020, 6, 15))),
        ];
        sort_by_capture_date(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["dated.jpg", "z.png", "m.png", "a.png"]);
    }

    #[test]
    fn equal_dates_keep_scan_order() {
        let same = date(2023, 7, 4);
        let mut records = vec![
            record("second.jpg", Some(same)),
            record("first.jpg", Some(same)),
        ];
        sort_by_capture_date(&mut records);

        // Stable sort: ties stay in their original order
        let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["second.jpg", "first.jpg"]);
    }
}
