//! Endpoint factories.
//!
//! Each factory knows how to build the request for one endpoint and how to
//! turn the raw response into a typed value. The [`QueryEngine`](crate::QueryEngine)
//! does the transport work in between, so factories never touch the network
//! and can be tested with hand-made [`RawResponse`]s.

mod captcha;
mod page;
mod result;

pub use captcha::CaptchaFactory;
pub use page::PageFactory;
pub use result::ResultFactory;

use crate::error::{EResultError, Result};
use url::Url;

/// Request construction and response decoding for a single endpoint.
pub trait CallFactory {
    /// Value produced by a successful decode.
    type Output;

    /// Build the outbound GET request relative to `base`.
    fn build_request(&self, base: &Url) -> Result<RawRequest>;

    /// Convert the transport response into [`Self::Output`].
    fn decode(&self, response: RawResponse) -> Result<Self::Output>;
}

/// Outbound GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    url: Url,
    headers: Vec<(String, String)>,
}

impl RawRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of a query parameter, if present.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// Transport response handed to [`CallFactory::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// All values of a header in arrival order (case-insensitive name).
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Append `sub_path` to the path of `base`, keeping any prefix the base has.
pub(crate) fn endpoint_url(base: &Url, sub_path: &str) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            EResultError::Configuration(format!("base url '{}' cannot carry a path", base))
        })?;
        segments
            .pop_if_empty()
            .extend(sub_path.split('/').filter(|s| !s.is_empty()));
        if sub_path.ends_with('/') {
            segments.push("");
        }
    }
    Ok(url)
}

/// Decode a response body as UTF-8 text.
pub(crate) fn body_text(response: RawResponse) -> Result<String> {
    String::from_utf8(response.into_body())
        .map_err(|e| EResultError::Decode(format!("response body is not valid UTF-8: {}", e)))
}

/// Encode a blank PNG of the given size.
#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::new_rgb8(width, height)
        .write_to(&mut buffer, ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}
