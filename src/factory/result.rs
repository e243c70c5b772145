//! Result page endpoint.

use super::{body_text, endpoint_url, CallFactory, RawRequest, RawResponse};
use crate::error::{EResultError, Result};
use crate::models::ResultDocument;
use crate::query::Query;
use crate::session::Session;
use url::Url;

const RESULT_PATH: &str = "/v2/getres";

/// Submits a captcha answer with a validated [`Query`] and returns the
/// result page.
#[derive(Debug, Clone)]
pub struct ResultFactory {
    query: Query,
    session: Session,
    captcha: String,
}

impl ResultFactory {
    /// `session` is moved in: one captcha answer, one result fetch.
    pub fn new(query: Query, session: Session, captcha: impl Into<String>) -> Self {
        Self {
            query,
            session,
            captcha: captcha.into(),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl CallFactory for ResultFactory {
    type Output = ResultDocument;

    fn build_request(&self, base: &Url) -> Result<RawRequest> {
        let query = &self.query;
        let result_type = query.variant().discriminant().ok_or_else(|| {
            EResultError::Configuration(format!(
                "{} queries have no result type on the remote site",
                query.variant()
            ))
        })?;

        let mut url = endpoint_url(base, RESULT_PATH)?;
        url.query_pairs_mut()
            .append_pair("exam", query.exam_type().map(|e| e.as_str()).unwrap_or_default())
            .append_pair("year", query.year().unwrap_or_default())
            .append_pair("board", query.board_type().map(|b| b.as_str()).unwrap_or_default())
            .append_pair("result_type", result_type)
            .append_pair("roll", query.student_roll_number().unwrap_or_default())
            .append_pair("reg", query.registration_id().unwrap_or_default())
            .append_pair("eiin", query.eiin_code().unwrap_or_default())
            .append_pair("dcode", query.district_code().unwrap_or_default())
            .append_pair("ccode", query.center_code().unwrap_or_default())
            .append_pair("captcha", &self.captcha);

        Ok(RawRequest::new(url).with_header("Cookie", self.session.cookie()))
    }

    fn decode(&self, response: RawResponse) -> Result<ResultDocument> {
        body_text(response).map(ResultDocument::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoardType, ExamType, QueryVariant};
    use std::collections::HashMap;

    fn individual() -> Query {
        Query::builder()
            .variant(QueryVariant::Individual)
            .year("2024")
            .exam_type(ExamType::Ssc)
            .board_type(BoardType::Dhaka)
            .registration_id("123")
            .student_roll_number("456")
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_request_parameters() {
        let factory = ResultFactory::new(individual(), Session::new("SID=abc"), "xY12");
        let base = Url::parse("https://eboardresults.com").unwrap();
        let request = factory.build_request(&base).unwrap();

        assert_eq!(request.url().path(), "/v2/getres");

        let params: HashMap<String, String> = request.url().query_pairs().into_owned().collect();
        let expected: HashMap<String, String> = [
            ("exam", "ssc"),
            ("year", "2024"),
            ("board", "dhaka"),
            ("result_type", "1"),
            ("roll", "456"),
            ("reg", "123"),
            ("eiin", ""),
            ("dcode", ""),
            ("ccode", ""),
            ("captcha", "xY12"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(params, expected);

        assert_eq!(request.header("cookie"), Some("SID=abc"));
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn test_center_discriminant() {
        let query = Query::builder()
            .variant(QueryVariant::Center)
            .year("2023")
            .center_code("101")
            .district_code("26")
            .exam_type(ExamType::Hsc)
            .board_type(BoardType::Technical)
            .build()
            .unwrap();
        let factory = ResultFactory::new(query, Session::new("SID=1"), "abcd");
        let base = Url::parse("https://eboardresults.com").unwrap();
        let request = factory.build_request(&base).unwrap();

        assert_eq!(request.query_param("result_type").as_deref(), Some("3"));
        assert_eq!(request.query_param("ccode").as_deref(), Some("101"));
        assert_eq!(request.query_param("board").as_deref(), Some("technical"));
    }

    #[test]
    fn test_decode_returns_body_verbatim() {
        let factory = ResultFactory::new(individual(), Session::new("SID=abc"), "xY12");
        let body = "<html><body>GPA 5.00</body></html>";
        let response = RawResponse::new(200, Vec::new(), body.as_bytes().to_vec());

        let document = factory.decode(response).unwrap();
        assert_eq!(document.as_str(), body);
    }
}
