//! Session token linking a captcha fetch to the result fetch that follows it.
//!
//! The remote site ties each captcha image to the cookie it issues alongside
//! it. The result endpoint only accepts a captcha answer when that same cookie
//! is sent back, so the token is carried as a plain value from
//! [`CaptchaChallenge`](crate::models::CaptchaChallenge) into
//! [`ResultFactory`](crate::factory::ResultFactory).

use serde::Serialize;

/// Cookie issued by the captcha endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    cookie: String,
}

impl Session {
    /// Wrap an already extracted `name=value` cookie.
    pub fn new(cookie: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
        }
    }

    /// Build a session from a raw `Set-Cookie` header value.
    ///
    /// Only the leading `name=value` pair is kept; attributes such as `Path`
    /// or `HttpOnly` are not meant to be echoed back in a `Cookie` header.
    pub fn from_set_cookie(value: &str) -> Option<Self> {
        let pair = value.split(';').next().unwrap_or_default().trim();
        if pair.is_empty() {
            return None;
        }
        Some(Self::new(pair))
    }

    /// Value for the `Cookie` request header.
    pub fn cookie(&self) -> &str {
        &self.cookie
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.cookie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_are_stripped() {
        let session = Session::from_set_cookie("SID=abc; Path=/; HttpOnly").unwrap();
        assert_eq!(session.cookie(), "SID=abc");
    }

    #[test]
    fn test_bare_pair() {
        let session = Session::from_set_cookie("  SID=abc ").unwrap();
        assert_eq!(session.cookie(), "SID=abc");
    }

    #[test]
    fn test_empty_header() {
        assert!(Session::from_set_cookie("").is_none());
        assert!(Session::from_set_cookie(" ; Path=/").is_none());
    }
}
