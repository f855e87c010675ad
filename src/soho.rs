//! SOHO archive addressing
//!
//! Frames live under `{base}/{year}/{instrument}/{YYYYMMDD}/{YYYYMMDD_HHMM}_{instrument}_{res}.jpg`.

use crate::constants::{SOHO_BASE_URL, SOHO_RESOLUTION};
use crate::types::DateParts;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// URL of the frame taken at `at`
pub fn frame_url(at: NaiveDateTime, instrument: &str) -> String {
    format!(
        "{}{}/{}/{}/{}_{}_{}.jpg",
        SOHO_BASE_URL,
        at.format("%Y"),
        instrument,
        at.format("%Y%m%d"),
        at.format("%Y%m%d_%H%M"),
        instrument,
        SOHO_RESOLUTION
    )
}

/// URLs for every `cadence` step from `start` to `end`, both inclusive.
pub fn frame_urls(
    start: NaiveDateTime,
    end: NaiveDateTime,
    instrument: &str,
    cadence: TimeDelta,
) -> Vec<String> {
    let mut urls = Vec::new();
    if cadence <= TimeDelta::zero() {
        return urls;
    }

    let mut at = start;
    while at <= end {
        urls.push(frame_url(at, instrument));
        match at.checked_add_signed(cadence) {
            Some(next) => at = next,
            None => break,
        }
    }
    urls
}

/// All frames of one calendar day, starting at midnight
pub fn day_urls(parts: &DateParts, instrument: &str, cadence: TimeDelta) -> Vec<String> {
    let Some(date) = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day) else {
        return Vec::new();
    };
    let start = date.and_time(NaiveTime::MIN);
    let end = date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN));
    frame_urls(start, end, instrument, cadence)
}

/// Local cache file name for a frame URL
pub fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_frame_url_layout() {
        let url = frame_url(at(2024, 3, 15, 1, 30), "hmiigr");
        assert_eq!(
            url,
            "https://soho.nascom.nasa.gov/data/REPROCESSING/Completed/2024/hmiigr/20240315/20240315_0130_hmiigr_1024.jpg"
        );
    }

    #[test]
    fn test_five_digit_year_keeps_day_directory_whole() {
        let url = frame_url(at(10000, 1, 2, 3, 4), "hmiigr");
        let day = NaiveDate::from_ymd_opt(10000, 1, 2).unwrap().format("%Y%m%d").to_string();
        let stamp = at(10000, 1, 2, 3, 4).format("%Y%m%d_%H%M").to_string();
        assert!(url.ends_with(&format!("/hmiigr/{}/{}_hmiigr_1024.jpg", day, stamp)));
        assert!(stamp.starts_with(&day));
    }

    #[test]
    fn test_range_is_inclusive() {
        let urls = frame_urls(
            at(2024, 3, 15, 0, 0),
            at(2024, 3, 15, 3, 0),
            "hmiigr",
            TimeDelta::minutes(90),
        );
        assert_eq!(urls.len(), 3);
        assert!(urls[2].ends_with("20240315_0300_hmiigr_1024.jpg"));
    }

    #[test]
    fn test_non_positive_cadence_yields_nothing() {
        let start = at(2024, 3, 15, 0, 0);
        assert!(frame_urls(start, start, "hmiigr", TimeDelta::zero()).is_empty());
        assert!(frame_urls(start, start, "hmiigr", TimeDelta::minutes(-5)).is_empty());
    }

    #[test]
    fn test_day_urls_cover_one_day() {
        let parts = DateParts { day: 1, month: 12, year: 2025 };
        let urls = day_urls(&parts, "hmiigr", TimeDelta::minutes(90));
        assert_eq!(urls.len(), 16);
        assert!(urls[0].contains("/2025/hmiigr/20251201/20251201_0000_"));
        assert!(urls[15].contains("20251201_2230_"));
    }

    #[test]
    fn test_day_urls_reject_impossible_parts() {
        let parts = DateParts { day: 31, month: 2, year: 2025 };
        assert!(day_urls(&parts, "hmiigr", TimeDelta::minutes(90)).is_empty());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("https://x/a/b/20240315_0000_hmiigr_1024.jpg"), "20240315_0000_hmiigr_1024.jpg");
    }
}
