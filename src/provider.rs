// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 服务注册模块
//!
//! 将 [`CookieManager`] 接入请求作用域的服务容器：每个请求注册一次，之后业务代码按类型取用。
//!
//! 管理器唯一的外部依赖是能读到 `Cookie` 请求头，这一点由 [`HeaderSource`] 抽象。

use http::Extensions;
use log::debug;

use crate::{
    config::CookieConfig, exception::Exception, manager::CookieManager, param::COOKIE_HEADER,
};

/// 可以按名称读取请求头的对象。字段名大小写不敏感由实现方保证。
#[cfg_attr(test, mockall::automock)]
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<String>;
}

/// 请求作用域的服务容器，每种类型最多保存一个实例。
#[derive(Debug, Default)]
pub struct RequestScope {
    extensions: Extensions,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// 放入一个服务，返回被替换掉的同类型旧实例。
    pub fn insert<T: Clone + Send + Sync + 'static>(&mut self, service: T) -> Option<T> {
        self.extensions.insert(service)
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.extensions.get::<T>()
    }

    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.extensions.get_mut::<T>()
    }

    pub fn take<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.extensions.remove::<T>()
    }
}

/// 负责在请求作用域中构建并注册 [`CookieManager`]。
#[derive(Debug, Clone, Default)]
pub struct CookieServiceProvider {
    config: CookieConfig,
}

impl CookieServiceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CookieConfig) -> Self {
        Self { config }
    }

    /// 读取 `Cookie` 请求头（缺失时视为空串）构建管理器并放入作用域，已有实例会被替换。
    pub fn register(&self, scope: &mut RequestScope, source: &dyn HeaderSource) {
        let header = source.header(COOKIE_HEADER).unwrap_or_default();
        let manager = CookieManager::with_config(&header, self.config.clone());
        debug!(
            "注册 CookieManager，请求携带 {} 个 Cookie",
            manager.incoming_cookies().len()
        );
        if scope.insert(manager).is_some() {
            debug!("替换了作用域中已有的 CookieManager");
        }
    }

    pub fn resolve(scope: &RequestScope) -> Result<&CookieManager, Exception> {
        scope
            .get::<CookieManager>()
            .ok_or(Exception::ServiceMissing(std::any::type_name::<CookieManager>()))
    }

    pub fn resolve_mut(scope: &mut RequestScope) -> Result<&mut CookieManager, Exception> {
        scope
            .get_mut::<CookieManager>()
            .ok_or(Exception::ServiceMissing(std::any::type_name::<CookieManager>()))
    }
}
