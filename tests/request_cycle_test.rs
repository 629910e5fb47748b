// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

use cookie_manager::{
    Cookie, CookieConfig, CookieManager, CookieServiceProvider, Request, RequestScope, Response,
    SameSite,
};

fn set_cookie_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .split("\r\n")
        .filter_map(|line| line.strip_prefix("Set-Cookie: "))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod request_cycle_tests {
    use super::*;

    /// 完整模拟一次请求：解析请求头、注册管理器、业务代码读写 Cookie、写出响应头
    #[test]
    fn test_full_cycle() {
        let raw = b"GET /account HTTP/1.1\r\nHost: localhost:7878\r\nCookie: sid=abc; theme=dark; lang=en\r\n\r\n";
        let request = Request::try_from(raw, 1).unwrap();
        let mut scope = RequestScope::new();
        let provider = CookieServiceProvider::with_config(
            CookieConfig::from_toml_str("http_only = true\nsame_site = \"lax\"").unwrap(),
        );

        provider.register(&mut scope, &request);

        {
            let manager = CookieServiceProvider::resolve_mut(&mut scope).unwrap();
            assert_eq!(manager.get("theme", None).unwrap().value(), "dark");

            let theme = manager.make("theme", "light");
            manager.queue(theme);
            let forget = manager.forget("sid");
            manager.queue(forget);
            assert_eq!(manager.get("theme", None).unwrap().value(), "light");
        }

        let mut manager = scope.take::<CookieManager>().unwrap();
        let mut response = Response::new();
        response.with_cookies(&mut manager);
        let lines = set_cookie_lines(&response.as_bytes());

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("sid=; expires="));
        assert!(lines[0].ends_with("; Max-Age=0; path=/; httponly; samesite=lax"));
        assert_eq!(lines[1], "theme=light; Max-Age=0; path=/; httponly; samesite=lax");
    }

    /// 没有 Cookie 头的请求得到空管理器，响应不带 Set-Cookie
    #[test]
    fn test_cycle_without_cookies() {
        let request = Request::try_from(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n", 2).unwrap();
        let mut scope = RequestScope::new();

        CookieServiceProvider::new().register(&mut scope, &request);

        let manager = CookieServiceProvider::resolve_mut(&mut scope).unwrap();
        assert!(manager.incoming_cookies().is_empty());

        let mut response = Response::new();
        response.with_cookies(manager);
        assert!(set_cookie_lines(&response.as_bytes()).is_empty());
    }

    /// 下发一个长期 Cookie，Max-Age 与 expires 同时出现
    #[test]
    fn test_forever_cookie_header() {
        let mut manager = CookieManager::new("");
        let mut remember = manager.forever("remember", "1");
        remember.set_secure(true).set_same_site(SameSite::Strict);
        manager.queue(remember);

        let mut response = Response::new();
        response.with_cookies(&mut manager);
        let lines = set_cookie_lines(&response.as_bytes());

        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("remember=1; expires="));
        let max_age: i64 = lines[0]
            .split("; ")
            .find_map(|attr| attr.strip_prefix("Max-Age="))
            .unwrap()
            .parse()
            .unwrap();
        assert!(max_age > 12 * 365 * 24 * 3600);
        assert!(lines[0].ends_with("; path=/; secure; samesite=strict"));
    }

    /// 畸形的 Cookie 头不会影响请求处理
    #[test]
    fn test_malformed_cookie_header_is_tolerated() {
        let raw = b"GET / HTTP/1.1\r\nCookie: ;;=x; ok=1; %FF=bad; novalue\r\n\r\n";
        let request = Request::try_from(raw, 3).unwrap();
        let mut scope = RequestScope::new();

        CookieServiceProvider::new().register(&mut scope, &request);

        let manager = CookieServiceProvider::resolve(&scope).unwrap();
        assert_eq!(manager.incoming("ok").unwrap().value(), "1");
        assert_eq!(manager.incoming("novalue").unwrap().value(), "");
        assert_eq!(manager.incoming("\u{FFFD}").unwrap().value(), "bad");
        assert_eq!(manager.incoming_cookies().len(), 3);
    }

    #[test]
    fn test_queued_cookie_can_be_reconfigured() {
        let mut manager = CookieManager::new("");
        manager.queue(Cookie::new("a", "1"));
        manager.queued_mut("a").unwrap().set_domain("example.com");

        let headers = manager.set_cookie_headers();

        assert_eq!(headers, vec!["a=1; Max-Age=0; path=/; domain=example.com".to_string()]);
    }
}
