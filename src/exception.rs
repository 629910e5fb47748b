// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 该模块定义了 Cookie 子系统在一次请求/响应周期内可能抛出的各类异常情况。
//!
//! ## 设计意图
//! - **错误分类**：涵盖了 Cookie 参数校验错误、请求报文解析错误、配置文件错误以及容器注册错误。
//! - **宽容解析**：`Cookie` 请求头中的畸形片段不会产生异常，而是被静默丢弃，因此这里没有对应的变体。
//! - **用户友好**：通过实现 `std::fmt::Display`，确保错误信息可以被安全地记录到日志中。

use std::fmt;

/// Cookie 子系统处理过程中发生的异常类型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exception {
    /// 传给 `Cookie::set_expire` 的时间戳（毫秒）非零，且无法表示一个合法的日期时间。
    InvalidArgument(i64),
    /// 客户端发送的请求字节流无法解析为合法的 UTF-8 字符串。
    RequestIsNotUtf8,
    /// 请求行缺少方法、路径或协议版本。
    MalformedRequestLine,
    /// 无法读取配置文件，附带文件路径与底层错误描述。
    ConfigUnreadable(String),
    /// 配置文件内容不是合法的 TOML，或字段取值非法。
    ConfigInvalid(String),
    /// 在请求作用域中找不到指定类型的服务，附带该类型名。
    ServiceMissing(&'static str),
}

use Exception::*;

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument(ts) => write!(f, "Invalid cookie expiry timestamp: {}", ts),
            RequestIsNotUtf8 => write!(f, "Request bytes can't be parsed in UTF-8"),
            MalformedRequestLine => write!(f, "Malformed request line"),
            ConfigUnreadable(e) => write!(f, "Couldn't read config file: {}", e),
            ConfigInvalid(e) => write!(f, "Invalid config: {}", e),
            ServiceMissing(name) => write!(f, "Service not registered in request scope: {}", name),
        }
    }
}

impl std::error::Error for Exception {}
