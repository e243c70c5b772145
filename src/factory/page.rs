//! Plain page fetch, used to check that the site is reachable.

use super::{body_text, endpoint_url, CallFactory, RawRequest, RawResponse};
use crate::error::Result;
use url::Url;

const HOME_PATH: &str = "/en/ebr.app/home/";

/// Fetches a page and returns its body as text.
#[derive(Debug, Clone)]
pub struct PageFactory {
    sub_path: String,
}

impl PageFactory {
    /// Factory for the site's landing page.
    pub fn home() -> Self {
        Self::new(HOME_PATH)
    }

    pub fn new(sub_path: impl Into<String>) -> Self {
        Self {
            sub_path: sub_path.into(),
        }
    }
}

impl Default for PageFactory {
    fn default() -> Self {
        Self::home()
    }
}

impl CallFactory for PageFactory {
    type Output = String;

    fn build_request(&self, base: &Url) -> Result<RawRequest> {
        Ok(RawRequest::new(endpoint_url(base, &self.sub_path)?))
    }

    fn decode(&self, response: RawResponse) -> Result<String> {
        body_text(response)
    }
}
