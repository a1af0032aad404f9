use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 日期解析失败时的展示文本，与前端日期库的输出保持一致
pub const INVALID_DATE: &str = "Invalid Date";

/// 展示用日期格式：日-月-年
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// 解析发布时间，支持 RFC 3339、无时区的日期时间以及纯日期
pub fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        // 保留原始时区下的日期，不换算成 UTC
        return Some(date_time.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date_time.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// 将发布时间格式化为 `DD-MM-YYYY`，无法解析时返回 `Invalid Date`
pub fn format_publish_date(raw: &str) -> String {
    match parse_publish_date(raw) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339() {
        assert_eq!(format_publish_date("2020-03-14T09:26:53Z"), "14-03-2020");
        assert_eq!(format_publish_date("2019-12-31T23:30:00+05:00"), "31-12-2019");
        assert_eq!(format_publish_date("2021-07-04T10:00:00.123Z"), "04-07-2021");
    }

    #[test]
    fn formats_naive_inputs() {
        assert_eq!(format_publish_date("2020-01-02T03:04:05"), "02-01-2020");
        assert_eq!(format_publish_date("2020-01-02 03:04:05.5"), "02-01-2020");
        assert_eq!(format_publish_date("2020-01-02T03:04"), "02-01-2020");
        assert_eq!(format_publish_date(" 2020-01-02 "), "02-01-2020");
    }

    #[test]
    fn unparseable_input_is_invalid_date() {
        assert_eq!(format_publish_date(""), INVALID_DATE);
        assert_eq!(format_publish_date("yesterday"), INVALID_DATE);
        assert_eq!(format_publish_date("2020-13-40"), INVALID_DATE);
    }
}
