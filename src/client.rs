//! Two-phase client: fetch a captcha, then fetch the result with its answer.

use crate::config::{EngineConfig, DEFAULT_BASE_URL};
use crate::context::{CompletionContext, SequentialExecutor};
use crate::engine::{QueryCallback, QueryEngine, QueryEngineBuilder};
use crate::error::Result;
use crate::factory::{CaptchaFactory, PageFactory, ResultFactory};
use crate::models::{CaptchaChallenge, ResultDocument};
use crate::query::Query;
use crate::session::Session;
use std::sync::Arc;

/// Result client for one validated [`Query`].
///
/// # Example
/// ```ignore
/// use eresult::{BoardType, ExamType, Query, QueryVariant, ResultClient};
///
/// let query = Query::builder()
///     .variant(QueryVariant::Individual)
///     .year("2024")
///     .exam_type(ExamType::Ssc)
///     .board_type(BoardType::Chittagong)
///     .student_roll_number("100826")
///     .registration_id("1814794298")
///     .build()?;
///
/// let client = ResultClient::new(query)?;
/// let challenge = client.fetch_captcha_blocking()?;
/// challenge.captcha.image().save("captcha.png")?;
///
/// let answer = read_answer_from_human();
/// let document = client.fetch_result_blocking(challenge.session, &answer)?;
/// println!("{}", document);
/// ```
pub struct ResultClient {
    engine: QueryEngine,
    query: Query,
    context: Arc<dyn CompletionContext>,
}

impl ResultClient {
    /// Client against eboardresults.com delivering callbacks on a dedicated
    /// [`SequentialExecutor`] thread.
    pub fn new(query: Query) -> Result<Self> {
        let engine = QueryEngineBuilder::from_config(EngineConfig::default())
            .base_url(DEFAULT_BASE_URL)
            .build()?;
        let context: Arc<dyn CompletionContext> = Arc::new(SequentialExecutor::new()?);
        Ok(Self::with_engine(engine, query, context))
    }

    pub fn with_engine(engine: QueryEngine, query: Query, context: Arc<dyn CompletionContext>) -> Self {
        Self {
            engine,
            query,
            context,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Fetch a captcha in the background.
    ///
    /// On success the callback receives the image and the [`Session`] that
    /// must accompany the answer.
    pub fn request_captcha<C>(&self, callback: C)
    where
        C: QueryCallback<CaptchaChallenge>,
    {
        self.engine
            .execute_async(CaptchaFactory::new(), Arc::clone(&self.context), callback);
    }

    /// Submit a captcha answer in the background.
    pub fn request_result<C>(&self, session: Session, captcha: impl Into<String>, callback: C)
    where
        C: QueryCallback<ResultDocument>,
    {
        let factory = ResultFactory::new(self.query.clone(), session, captcha);
        self.engine
            .execute_async(factory, Arc::clone(&self.context), callback);
    }

    pub async fn fetch_captcha(&self) -> Result<CaptchaChallenge> {
        self.engine.execute(&CaptchaFactory::new()).await
    }

    pub async fn fetch_result(&self, session: Session, captcha: &str) -> Result<ResultDocument> {
        let factory = ResultFactory::new(self.query.clone(), session, captcha);
        self.engine.execute(&factory).await
    }

    /// Fetch the site's landing page.
    pub async fn fetch_page(&self) -> Result<String> {
        self.engine.execute(&PageFactory::home()).await
    }

    pub fn fetch_captcha_blocking(&self) -> Result<CaptchaChallenge> {
        self.engine.execute_blocking(&CaptchaFactory::new())
    }

    pub fn fetch_result_blocking(&self, session: Session, captcha: &str) -> Result<ResultDocument> {
        let factory = ResultFactory::new(self.query.clone(), session, captcha);
        self.engine.execute_blocking(&factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::InlineContext;
    use crate::models::{BoardType, ExamType, QueryVariant};

    fn institution() -> Query {
        Query::builder()
            .variant(QueryVariant::Institution)
            .year("2022")
            .exam_type(ExamType::Hsc)
            .board_type(BoardType::Cumilla)
            .eiin_code("105647")
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_client_targets_site() {
        let client = ResultClient::new(institution()).unwrap();
        assert_eq!(client.engine().base_url().as_str(), "https://eboardresults.com/");
        assert_eq!(client.query().eiin_code(), Some("105647"));
    }

    #[tokio::test]
    async fn test_fetch_page_async() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/en/ebr.app/home/")
            .with_body("home")
            .create_async()
            .await;

        let engine = QueryEngine::builder().base_url(server.url()).build().unwrap();
        let client = ResultClient::with_engine(engine, institution(), Arc::new(InlineContext));

        assert_eq!(client.fetch_page().await.unwrap(), "home");
    }
}
