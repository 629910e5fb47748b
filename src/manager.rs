// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Cookie 管理器模块
//!
//! [`CookieManager`] 的生命周期与一次请求/响应周期相同，维护两张以 Cookie 名称为键的表：
//! 1. `incoming`：构造时由 `Cookie` 请求头一次性解析得到，此后只读。
//! 2. `queue`：本次响应准备通过 `Set-Cookie` 下发的 Cookie，可随时加入或移除。
//!
//! 按名称查找时下发队列优先于请求中的 Cookie，即“本次响应刚设置的值覆盖客户端发来的值”。
//!
//! 管理器不做任何同步，不应在线程之间共享。

use std::collections::HashMap;

use log::{debug, trace};

use crate::{config::CookieConfig, cookie::Cookie, util::decode_component};

#[derive(Debug, Clone, Default)]
pub struct CookieManager {
    incoming: HashMap<String, Cookie>,
    queue: HashMap<String, Cookie>,
    config: CookieConfig,
}

impl CookieManager {
    /// 以默认配置构建管理器，并立即解析 `Cookie` 请求头（可以为空串）。
    pub fn new(header: &str) -> Self {
        Self::with_config(header, CookieConfig::new())
    }

    pub fn with_config(header: &str, config: CookieConfig) -> Self {
        let mut manager = Self {
            incoming: HashMap::new(),
            queue: HashMap::new(),
            config,
        };
        manager.parse_incoming_cookies(header);
        manager
    }

    /// 按 `;` 切分请求头并逐段解析，无法解析的片段被丢弃，同名时后出现的覆盖先出现的。
    pub fn parse_incoming_cookies(&mut self, header: &str) -> &mut Self {
        for fragment in header.split(';') {
            match Self::parse_cookie(fragment) {
                Some(cookie) => {
                    self.incoming.insert(cookie.name().to_string(), cookie);
                }
                None => debug!("丢弃无法解析的 Cookie 片段：{:?}", fragment),
            }
        }
        self
    }

    /// 解析单个 `name=value` 片段。
    ///
    /// 在第一个 `=` 处切分，没有 `=` 时值为空串。名称去掉前导空白，名称与值都做百分号解码。
    /// 解码后名称为空时返回 `None`。
    pub fn parse_cookie(fragment: &str) -> Option<Cookie> {
        let (name, value) = fragment.split_once('=').unwrap_or((fragment, ""));
        let name = decode_component(name.trim_start());
        if name.is_empty() {
            return None;
        }
        Some(Cookie::new(name, decode_component(value)))
    }

    pub fn has_queued(&self, name: &str) -> bool {
        self.queue.contains_key(name)
    }

    /// 将 Cookie 加入下发队列，同名条目被覆盖。
    pub fn queue(&mut self, cookie: Cookie) -> &mut Self {
        trace!("加入下发队列：{}", cookie.name());
        self.queue.insert(cookie.name().to_string(), cookie);
        self
    }

    /// 从下发队列移除指定名称的 Cookie，不存在时什么也不做。
    pub fn unqueue(&mut self, name: &str) {
        if self.queue.remove(name).is_some() {
            trace!("移出下发队列：{}", name);
        }
    }

    pub fn incoming(&self, name: &str) -> Option<&Cookie> {
        self.incoming.get(name)
    }

    pub fn queued(&self, name: &str) -> Option<&Cookie> {
        self.queue.get(name)
    }

    pub fn queued_mut(&mut self, name: &str) -> Option<&mut Cookie> {
        self.queue.get_mut(name)
    }

    /// 请求中携带的全部 Cookie（只读视图）
    pub fn incoming_cookies(&self) -> &HashMap<String, Cookie> {
        &self.incoming
    }

    /// 下发队列中的全部 Cookie（只读视图）
    pub fn queued_cookies(&self) -> &HashMap<String, Cookie> {
        &self.queue
    }

    /// 先查下发队列，再查请求中的 Cookie，都没有时返回 `default`。
    pub fn get<'a>(&'a self, name: &str, default: Option<&'a Cookie>) -> Option<&'a Cookie> {
        self.queued(name).or_else(|| self.incoming(name)).or(default)
    }

    pub fn config(&self) -> &CookieConfig {
        &self.config
    }

    /// 按配置中的默认属性构建一个新的 Cookie，不会自动加入队列。
    pub fn make(&self, name: impl Into<String>, value: impl Into<String>) -> Cookie {
        let mut cookie = Cookie::new(name, value);
        cookie
            .set_path(self.config.path())
            .set_domain(self.config.domain())
            .set_secure(self.config.secure())
            .set_http_only(self.config.http_only())
            .set_raw(self.config.raw())
            .set_same_site(self.config.same_site());
        cookie
    }

    /// 构建一个 13 年后过期的 Cookie。
    pub fn forever(&self, name: impl Into<String>, value: impl Into<String>) -> Cookie {
        let mut cookie = self.make(name, value);
        cookie.forever();
        cookie
    }

    /// 构建一个用于删除客户端同名 Cookie 的空值 Cookie。
    pub fn forget(&self, name: impl Into<String>) -> Cookie {
        let mut cookie = self.make(name, "");
        cookie.expire();
        cookie
    }

    /// 依次序列化下发队列中的每个 Cookie，结果按名称排序，每一项对应一行 `Set-Cookie`。
    ///
    /// 值为空的 Cookie 在这里被强制过期，过期时间写回队列中的实例。
    pub fn set_cookie_headers(&mut self) -> Vec<String> {
        let mut cookies: Vec<&mut Cookie> = self.queue.values_mut().collect();
        cookies.sort_by(|a, b| a.name().cmp(b.name()));
        cookies.into_iter().map(|c| c.to_header_value()).collect()
    }
}
