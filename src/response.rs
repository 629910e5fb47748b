// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

use crate::{
    manager::CookieManager,
    param::*,
    util::format_http_date,
};

use chrono::prelude::*;
use log::debug;

/// 只携带 Cookie 相关头部的 HTTP 响应，不包含正文。
#[derive(Debug, Clone)]
pub struct Response {
    version: HttpVersion,
    status_code: u16,
    information: String,
    date: DateTime<Utc>,
    set_cookies: Vec<String>,
}

impl Response {
    pub fn new() -> Self {
        Self {
            version: HttpVersion::V1_1,
            status_code: 200,
            information: "OK".to_string(),
            date: Utc::now(),
            set_cookies: Vec::new(),
        }
    }

    /// 取出管理器下发队列中全部 Cookie 的序列化结果，每个 Cookie 对应一行 `Set-Cookie`。
    pub fn with_cookies(&mut self, manager: &mut CookieManager) -> &mut Self {
        self.set_cookies = manager.set_cookie_headers();
        debug!("响应携带 {} 行 Set-Cookie", self.set_cookies.len());
        self
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        let mut header = format!(
            "{} {} {}{CRLF}Content-Length: 0{CRLF}Date: {}{CRLF}",
            self.version,
            self.status_code,
            self.information,
            format_date(&self.date),
        );
        for cookie in &self.set_cookies {
            header.push_str(&[SET_COOKIE_HEADER, ": ", cookie.as_str(), CRLF].concat());
        }
        header.push_str(CRLF);
        header.into_bytes()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn information(&self) -> &str {
        &self.information
    }

    pub fn set_cookies(&self) -> &[String] {
        &self.set_cookies
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    format_http_date(date.timestamp_millis())
}
