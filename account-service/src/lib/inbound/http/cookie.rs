use axum::http::HeaderValue;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use axum_extra::extract::CookieJar;

/// Shape of the HTTP-only cookie that carries the session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    /// Cookie holding `token` for a session lasting `ttl`.
    ///
    /// Returns `None` when the cookie cannot be sent: the configured name is
    /// not an RFC 6265 token, or the rendering the jar sends is not a valid
    /// header value.
    pub fn build(&self, token: String, ttl: chrono::Duration) -> Option<Cookie<'static>> {
        if !is_cookie_name(&self.name) {
            return None;
        }

        let cookie = Cookie::build((self.name.clone(), token))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(ttl.num_seconds()))
            .build();

        HeaderValue::from_str(&cookie.encoded().to_string()).ok()?;
        Some(cookie)
    }

    /// Expired cookie that makes the client drop the session.
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((self.name.clone(), String::new()))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .build();
        cookie.make_removal();
        cookie
    }

    /// Session token presented in the request cookies, if any.
    pub fn token_from(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.name)
            .map(|cookie| cookie.value().to_owned())
            .filter(|token| !token.is_empty())
    }
}

// token = 1*<any CHAR except CTLs or separators>
fn is_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|byte| {
            byte.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&byte)
        })
}

#[cfg(test)]
mod tests {
    use axum::http::header::COOKIE;
    use axum::http::HeaderMap;
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_build_sets_session_attributes() {
        let cookie = SessionCookie::new("token", true)
            .build("abc.def.ghi".to_string(), Duration::hours(24))
            .expect("Cookie not built");
        let rendered = cookie.encoded().to_string();

        assert!(rendered.starts_with("token=abc.def.ghi"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("Secure"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Max-Age=86400"));
    }

    #[test]
    fn test_max_age_follows_session_lifetime() {
        let cookie = SessionCookie::new("token", false)
            .build("abc.def.ghi".to_string(), Duration::minutes(90))
            .unwrap();

        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(5400)));
        assert!(!cookie.to_string().contains("Secure"));
    }

    #[test]
    fn test_build_rejects_unsendable_names() {
        for name in ["", "bad\u{7f}name", "se ssion", "a;b", "tök"] {
            let cookie = SessionCookie::new(name, false)
                .build("abc.def.ghi".to_string(), Duration::hours(1));
            assert!(cookie.is_none(), "name {:?} was accepted", name);
        }
    }

    #[test]
    fn test_removal_expires_cookie() {
        let cookie = SessionCookie::new("token", false).removal();

        assert_eq!(cookie.value(), "");
        assert!(cookie.to_string().contains("Max-Age=0"));
    }

    #[test]
    fn test_token_from_request_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; token=abc.def.ghi"));
        let jar = CookieJar::from_headers(&headers);

        let session_cookie = SessionCookie::new("token", false);
        assert_eq!(
            session_cookie.token_from(&jar),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(SessionCookie::new("session", false).token_from(&jar), None);
    }
}
