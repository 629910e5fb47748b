// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Cookie 值对象模块
//!
//! 一个 [`Cookie`] 表示一条 HTTP Cookie 的全部属性。它既可以由 `Cookie` 请求头解析得到，
//! 也可以由业务代码显式构建后放入 [`CookieManager`](crate::manager::CookieManager) 的下发队列。
//!
//! ## 序列化
//! `Display` 输出一行完整的 `Set-Cookie` 头部取值，属性顺序固定为：
//! `name=value`、`expires`、`Max-Age`、`path`、`domain`、`secure`、`httponly`、`samesite`。
//!
//! 值为空的 Cookie 表示“删除”：输出时强制带上一个过去的 `expires` 以及 `Max-Age=0`。
//! `Display` 本身不修改实例；需要把强制过期写回实例时使用 [`Cookie::to_header_value`]。

use std::{fmt, str::FromStr};

use chrono::Utc;
use log::{debug, warn};
use serde_derive::{Deserialize, Serialize};

use crate::{
    exception::Exception,
    param::EXPIRY_SPAN_YEARS,
    util::{encode_component, format_http_date, is_valid_timestamp, now_millis, years_after, years_before},
};

/// 跨站请求时 Cookie 的发送策略。
///
/// `None` 表示不设置该属性，序列化时整个 `samesite` 属性都会被省略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    #[default]
    None,
    Lax,
    Strict,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SameSite::None => write!(f, "none"),
            SameSite::Lax => write!(f, "lax"),
            SameSite::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for SameSite {
    type Err = Exception;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SameSite::None),
            "lax" => Ok(SameSite::Lax),
            "strict" => Ok(SameSite::Strict),
            other => Err(Exception::ConfigInvalid(format!("unknown samesite value: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cookie {
    name: String,
    /// 空字符串表示在序列化时删除该 Cookie
    value: String,
    /// 过期时间（毫秒时间戳），0 表示会话 Cookie
    expires_at: i64,
    path: String,
    domain: String,
    secure: bool,
    http_only: bool,
    /// 为假时名称与值在输出时做百分号编码
    raw: bool,
    same_site: SameSite,
}

impl Default for Cookie {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
            expires_at: 0,
            path: "/".to_string(),
            domain: String::new(),
            secure: false,
            http_only: false,
            raw: true,
            same_site: SameSite::None,
        }
    }
}

impl Cookie {
    /// 以默认属性构建 Cookie。不对名称与值做任何校验。
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// 设置过期时间（毫秒时间戳）。
    ///
    /// 0 表示会话 Cookie。非零且无法构造为合法日期时间的值返回
    /// [`Exception::InvalidArgument`]，此时原有的过期时间保持不变。
    pub fn set_expire(&mut self, timestamp: i64) -> Result<&mut Self, Exception> {
        if timestamp != 0 && !is_valid_timestamp(timestamp) {
            warn!("Cookie {} 的过期时间非法：{}", self.name, timestamp);
            return Err(Exception::InvalidArgument(timestamp));
        }
        self.expires_at = timestamp;
        Ok(self)
    }

    /// 将过期时间设为当前时间之前 13 年，使 Cookie 立即失效。
    pub fn expire(&mut self) -> &mut Self {
        self.expires_at = years_before(Utc::now(), EXPIRY_SPAN_YEARS);
        self
    }

    /// 将过期时间设为当前时间之后 13 年。
    pub fn forever(&mut self) -> &mut Self {
        self.expires_at = years_after(Utc::now(), EXPIRY_SPAN_YEARS);
        self
    }

    pub fn set_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = path.into();
        self
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) -> &mut Self {
        self.domain = domain.into();
        self
    }

    pub fn set_secure(&mut self, secure: bool) -> &mut Self {
        self.secure = secure;
        self
    }

    pub fn set_http_only(&mut self, http_only: bool) -> &mut Self {
        self.http_only = http_only;
        self
    }

    pub fn set_raw(&mut self, raw: bool) -> &mut Self {
        self.raw = raw;
        self
    }

    pub fn set_same_site(&mut self, same_site: SameSite) -> &mut Self {
        self.same_site = same_site;
        self
    }

    /// 生成 `Set-Cookie` 头部取值。
    ///
    /// 与 `to_string()` 的区别在于：值为空时会先对实例调用 [`Cookie::expire`]，
    /// 强制过期的时间会保留在实例上。
    pub fn to_header_value(&mut self) -> String {
        if self.value.is_empty() {
            debug!("Cookie {} 的值为空，强制过期", self.name);
            self.expire();
        }
        self.to_string()
    }

    fn max_age_at(&self, now: i64) -> i64 {
        if self.expires_at == 0 {
            return 0;
        }
        (self.expires_at - now).div_euclid(1000).max(0)
    }
}

// --- Getter 访问器实现 ---

impl Cookie {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// 过期时间（毫秒时间戳），会话 Cookie 返回 0
    pub fn expiry(&self) -> i64 {
        self.expires_at
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn same_site(&self) -> SameSite {
        self.same_site
    }

    /// 距离过期的秒数（向下取整，不小于 0）。会话 Cookie 返回 0。
    pub fn max_age(&self) -> i64 {
        self.max_age_at(now_millis())
    }

    /// `max_age()` 为 0 时返回真。
    ///
    /// 注意会话 Cookie（过期时间为 0）同样返回真。
    pub fn has_expired(&self) -> bool {
        self.max_age() == 0
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let now = Utc::now();
        write!(f, "{}=", encode_component(&self.name, self.raw))?;

        if self.value.is_empty() {
            let expired = years_before(now, EXPIRY_SPAN_YEARS);
            write!(f, "; expires={}; Max-Age=0", format_http_date(expired))?;
        } else {
            write!(f, "{}", encode_component(&self.value, self.raw))?;
            if self.expires_at != 0 {
                write!(f, "; expires={}", format_http_date(self.expires_at))?;
            }
            write!(f, "; Max-Age={}", self.max_age_at(now.timestamp_millis()))?;
        }

        if !self.path.is_empty() {
            write!(f, "; path={}", self.path)?;
        }
        if !self.domain.is_empty() {
            write!(f, "; domain={}", self.domain)?;
        }
        if self.secure {
            write!(f, "; secure")?;
        }
        if self.http_only {
            write!(f, "; httponly")?;
        }
        if self.same_site != SameSite::None {
            write!(f, "; samesite={}", self.same_site)?;
        }
        Ok(())
    }
}
