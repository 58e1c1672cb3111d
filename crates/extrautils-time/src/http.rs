//! Dates in the HTTP `IMF-fixdate` format.

use chrono::{DateTime, TimeZone, Utc};

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Formats an instant as an HTTP date, converted to GMT.
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use extrautils_time::http_formatted;
///
/// let prague = FixedOffset::east_opt(3600).unwrap();
/// let eve = prague.with_ymd_and_hms(2018, 12, 24, 15, 0, 0).unwrap();
/// assert_eq!(http_formatted(&eve), "Mon, 24 Dec 2018 14:00:00 GMT");
/// ```
pub fn http_formatted<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .format(HTTP_DATE_FORMAT)
        .to_string()
}

/// The current time as an HTTP date.
pub fn now_http_formatted() -> String {
    http_formatted(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn winter_offset() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let instant = cet.with_ymd_and_hms(2018, 12, 24, 15, 0, 0).unwrap();
        assert_eq!(http_formatted(&instant), "Mon, 24 Dec 2018 14:00:00 GMT");
    }

    #[test]
    fn summer_offset() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        let instant = cest.with_ymd_and_hms(2018, 7, 25, 15, 0, 0).unwrap();
        assert_eq!(http_formatted(&instant), "Wed, 25 Jul 2018 13:00:00 GMT");
    }

    #[test]
    fn crossing_midnight() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = tokyo.with_ymd_and_hms(2019, 1, 1, 5, 7, 9).unwrap();
        assert_eq!(http_formatted(&instant), "Mon, 31 Dec 2018 20:07:09 GMT");
    }

    #[test]
    fn single_digit_day_is_padded() {
        let instant = Utc.with_ymd_and_hms(2018, 3, 4, 1, 2, 3).unwrap();
        assert_eq!(http_formatted(&instant), "Sun, 04 Mar 2018 01:02:03 GMT");
    }

    #[test]
    fn now_has_http_shape() {
        let now = now_http_formatted();
        assert_eq!(now.len(), "Mon, 24 Dec 2018 14:00:00 GMT".len());
        assert!(now.ends_with(" GMT"));
        assert!(DateTime::parse_from_rfc2822(&now.replace("GMT", "+0000")).is_ok());
    }
}
