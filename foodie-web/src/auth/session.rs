//! Session cookie handling

use axum::http::{HeaderMap, HeaderValue, header};
use foodie_client::Session;

/// Session of the current request, set by [`super::resolve_session`]
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Option<Session>);

impl CurrentSession {
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }
}

/// Value of cookie `name` from the `Cookie` headers
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Session from the cookie, falling back to a bearer header.
///
/// Unreadable and expired tokens count as no session.
pub fn session_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<Session> {
    let token = read_cookie(headers, cookie_name).or_else(|| bearer_token(headers))?;
    match Session::from_tokens(token, None) {
        Ok(session) if !session.is_expired() => Some(session),
        Ok(session) => {
            tracing::debug!(user_id = session.user_id(), "session expired");
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "unreadable session token");
            None
        }
    }
}

/// `Set-Cookie` value storing the access token until it expires
pub fn session_cookie(name: &str, session: &Session, secure: bool) -> Option<HeaderValue> {
    let max_age = (session.claims.exp - chrono::Utc::now().timestamp()).max(0);
    let value = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
        name,
        session.access_token,
        max_age,
        if secure { "; Secure" } else { "" }
    );
    HeaderValue::from_str(&value).ok()
}

/// `Set-Cookie` value deleting the session cookie
pub fn clear_session_cookie(name: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", name))
        .unwrap_or_else(|_| HeaderValue::from_static("foodie_session=; Path=/; Max-Age=0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark; foodie_session=abc.def.ghi"));
        assert_eq!(read_cookie(&headers, "foodie_session").as_deref(), Some("abc.def.ghi"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(bearer_token(&headers).as_deref(), Some("tok"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_garbage_cookie_is_no_session() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("foodie_session=garbage"));
        assert!(session_from_headers(&headers, "foodie_session").is_none());
    }
}
