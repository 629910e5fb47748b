// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

use std::borrow::Cow;

use chrono::{DateTime, Months, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode};

use crate::param::{COOKIE_ENCODE_SET, HTTP_DATE_FORMAT};

/// 当前时间，Unix 纪元以来的毫秒数
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// 毫秒时间戳能否构造出一个合法的日期时间。
pub fn is_valid_timestamp(millis: i64) -> bool {
    DateTime::<Utc>::from_timestamp_millis(millis).is_some()
}

/// 将毫秒时间戳格式化为 HTTP-date（IMF-fixdate）。
///
/// 超出可表示范围的时间戳按纪元零点输出；经过 `Cookie::set_expire` 校验的值不会走到这一分支。
pub fn format_http_date(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .format(HTTP_DATE_FORMAT)
        .to_string()
}

/// `from` 之前 `years` 年的毫秒时间戳
pub fn years_before(from: DateTime<Utc>, years: u32) -> i64 {
    from.checked_sub_months(Months::new(years * 12))
        .unwrap_or(from)
        .timestamp_millis()
}

/// `from` 之后 `years` 年的毫秒时间戳
pub fn years_after(from: DateTime<Utc>, years: u32) -> i64 {
    from.checked_add_months(Months::new(years * 12))
        .unwrap_or(from)
        .timestamp_millis()
}

/// 按需对 Cookie 名称或值做百分号编码，`raw` 为真时原样返回。
pub fn encode_component(input: &str, raw: bool) -> Cow<'_, str> {
    if raw {
        Cow::Borrowed(input)
    } else {
        utf8_percent_encode(input, COOKIE_ENCODE_SET).into()
    }
}

/// 百分号解码。解码结果不是合法 UTF-8 时用替换字符兜底，从不失败。
pub fn decode_component(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
