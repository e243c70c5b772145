//! Captcha image endpoint.

use super::{endpoint_url, CallFactory, RawRequest, RawResponse};
use crate::error::{EResultError, Result};
use crate::models::{CaptchaChallenge, DecodedCaptcha};
use crate::session::Session;
use chrono::Utc;
use url::Url;

const CAPTCHA_PATH: &str = "/v2/captcha";

/// Fetches a captcha image together with the session cookie bound to it.
///
/// The factory is stateless: the session travels inside the returned
/// [`CaptchaChallenge`], so separate fetches never share a cookie.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptchaFactory;

impl CaptchaFactory {
    pub fn new() -> Self {
        Self
    }
}

impl CallFactory for CaptchaFactory {
    type Output = CaptchaChallenge;

    fn build_request(&self, base: &Url) -> Result<RawRequest> {
        let mut url = endpoint_url(base, CAPTCHA_PATH)?;
        // Cache buster so no intermediary serves a stale image
        url.query_pairs_mut()
            .append_pair("t", &Utc::now().timestamp_millis().to_string());
        Ok(RawRequest::new(url))
    }

    fn decode(&self, response: RawResponse) -> Result<CaptchaChallenge> {
        let session = response
            .header_values("set-cookie")
            .next()
            .and_then(Session::from_set_cookie)
            .ok_or_else(|| {
                EResultError::Decode("captcha response did not set a session cookie".into())
            })?;

        let bytes = response.into_body();
        let image = image::load_from_memory(&bytes)
            .map_err(|e| EResultError::Decode(format!("Failed to load captcha image: {}", e)))?;

        tracing::debug!(
            "Decoded captcha {}x{} ({} bytes)",
            image.width(),
            image.height(),
            bytes.len()
        );

        Ok(CaptchaChallenge {
            captcha: DecodedCaptcha::new(bytes, image),
            session,
        })
    }
}
