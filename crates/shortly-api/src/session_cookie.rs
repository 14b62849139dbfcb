//! Session cookie lifecycle
//!
//! The session token never reaches scripts: HttpOnly, SameSite=Lax, scoped
//! to the whole site, with Max-Age matching the session TTL. Clearing reuses
//! the same attributes with an empty value and Max-Age 0 so browsers drop
//! the cookie even when the server-side record was already gone.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use shortly_shared::constants::SESSION_COOKIE;

pub fn session_cookie(token: String, ttl_days: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(Duration::days(ttl_days))
        .build()
}

pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// The bearer token the client presented, if any.
pub fn presented_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok123".to_string(), 30, false);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok123");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(30)));
        assert_ne!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_secure_flag_follows_config() {
        let cookie = session_cookie("tok123".to_string(), 30, true);
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_clear_cookie_empties_value_and_expires_now() {
        let cookie = clear_session_cookie(false);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_presented_token_reads_session_cookie() {
        let jar = CookieJar::default().add(Cookie::new(SESSION_COOKIE, "abc"));
        assert_eq!(presented_token(&jar), Some("abc".to_string()));
        assert_eq!(presented_token(&CookieJar::default()), None);
    }
}
