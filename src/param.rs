// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Cookie 协议参数与常量模块
//!
//! 该模块定义了 Cookie 子系统遵循的 HTTP 协议相关常量和数据结构，包括：
//! - 相关请求头/响应头名称。
//! - 非 raw Cookie 使用的百分号编码字符集。
//! - `Set-Cookie` 中 `expires` 属性的日期格式。
//! - HTTP 方法与版本的强类型枚举。

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// HTTP 协议规定的换行符（Carriage Return Line Feed）
pub const CRLF: &str = "\r\n";

/// 请求头中携带客户端 Cookie 的字段名（小写，查找时大小写不敏感）
pub const COOKIE_HEADER: &str = "cookie";

/// 响应头中下发 Cookie 的字段名
pub const SET_COOKIE_HEADER: &str = "Set-Cookie";

/// `expire()` / `forever()` 相对当前时间偏移的年数
pub const EXPIRY_SPAN_YEARS: u32 = 13;

/// RFC 7231 IMF-fixdate 格式，例如 `Wed, 21 Oct 2025 07:28:00 GMT`
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// 非 raw Cookie 的名称与值使用的编码字符集。
///
/// 保留字母、数字以及 `- _ . ! ~ * ' ( )`，其余字符（包括空格、`;`、`=`、`%`）全部编码。
pub const COOKIE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 支持的 HTTP 协议版本
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HttpVersion {
    /// HTTP/1.0 版本
    V1_0,
    /// HTTP/1.1 版本
    V1_1,
}

/// 标准 HTTP 请求方法
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HttpRequestMethod {
    Get,
    Head,
    Options,
    Post,
    Put,
    Delete,
    Patch,
}

use std::fmt;

impl fmt::Display for HttpVersion {
    /// 将枚举格式化为 HTTP 报文中的版本字符串
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HttpVersion::V1_0 => write!(f, "HTTP/1.0"),
            HttpVersion::V1_1 => write!(f, "HTTP/1.1"),
        }
    }
}
