// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

use serde_derive::Deserialize;
use serde_derive::Serialize;

use log::warn;
use std::fs::File;
use std::io::prelude::*;

use crate::{cookie::SameSite, exception::Exception};

/// 新建下发 Cookie 时使用的默认属性。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CookieConfig {
    #[serde(default = "default_path")]
    path: String,
    #[serde(default)]
    domain: String,
    #[serde(default)]
    secure: bool,
    #[serde(default)]
    http_only: bool,
    #[serde(default = "default_raw")]
    raw: bool,
    #[serde(default)]
    same_site: SameSite,
}

fn default_path() -> String {
    "/".to_string()
}

fn default_raw() -> bool {
    true
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieConfig {
    pub fn new() -> Self {
        Self {
            path: default_path(),
            domain: String::new(),
            secure: false,
            http_only: false,
            raw: default_raw(),
            same_site: SameSite::None,
        }
    }

    pub fn from_toml(filename: &str) -> Result<Self, Exception> {
        let mut file = File::open(filename)
            .map_err(|e| Exception::ConfigUnreadable(format!("{}: {}", filename, e)))?;
        let mut str_val = String::new();
        file.read_to_string(&mut str_val)
            .map_err(|e| Exception::ConfigUnreadable(format!("{}: {}", filename, e)))?;
        Self::from_toml_str(&str_val)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Exception> {
        let raw_config: CookieConfig =
            toml::from_str(content).map_err(|e| Exception::ConfigInvalid(e.to_string()))?;
        if raw_config.same_site == SameSite::None && raw_config.secure {
            warn!("secure 已开启但未设置 samesite，浏览器会按各自的默认策略处理跨站请求。");
        }
        Ok(raw_config)
    }
}

impl CookieConfig {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }

    pub fn raw(&self) -> bool {
        self.raw
    }

    pub fn same_site(&self) -> SameSite {
        self.same_site
    }
}
