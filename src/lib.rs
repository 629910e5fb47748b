// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

pub mod config;
pub mod cookie;
pub mod exception;
pub mod manager;
pub mod param;
pub mod provider;
pub mod request;
pub mod response;
pub mod util;

pub use config::CookieConfig;
pub use cookie::{Cookie, SameSite};
pub use exception::Exception;
pub use manager::CookieManager;
pub use provider::{CookieServiceProvider, HeaderSource, RequestScope};
pub use request::Request;
pub use response::Response;
