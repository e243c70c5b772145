//! # eresult
//!
//! Client for the eboardresults.com examination result service.
//!
//! The site guards its results with a captcha. Fetching a result is a two
//! step affair:
//!
//! 1. Request a captcha image. The response also sets a session cookie.
//! 2. Have a human read the captcha, then submit the answer together with
//!    the query parameters and that same cookie.
//!
//! ## Features
//!
//! - **Validated queries**: [`QueryBuilder`] checks that each result type has
//!   the identifiers it needs before anything touches the network.
//! - **Explicit sessions**: the cookie from step 1 is returned as a
//!   [`Session`] value and moved into step 2, so concurrent flows never share
//!   state.
//! - **Sync, async or callbacks**: every endpoint can be awaited, run
//!   blocking, or run in the background with callbacks delivered on a
//!   [`CompletionContext`] of your choosing.
//! - **TLS Fingerprinting**: Uses `rquest` for Chrome-like TLS fingerprinting.
//!
//! ## Quick Start
//!
//! ```ignore
//! use eresult::{BoardType, ExamType, Query, QueryVariant, ResultClient};
//!
//! fn main() -> anyhow::Result<()> {
//!     let query = Query::builder()
//!         .variant(QueryVariant::Individual)
//!         .year("2024")
//!         .exam_type(ExamType::Ssc)
//!         .board_type(BoardType::Dhaka)
//!         .student_roll_number("100826")
//!         .registration_id("1814794298")
//!         .build()?;
//!
//!     let client = ResultClient::new(query)?;
//!
//!     client.request_captcha(|outcome: eresult::Result<eresult::CaptchaChallenge>| {
//!         match outcome {
//!             Ok(challenge) => show_captcha(challenge),
//!             Err(e) => eprintln!("captcha failed: {}", e),
//!         }
//!     });
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod factory;
pub mod models;
pub mod query;
pub mod session;

// Re-exports for convenience
pub use client::ResultClient;
pub use config::{EngineConfig, DEFAULT_BASE_URL};
pub use context::{CompletionContext, InlineContext, SequentialExecutor};
pub use engine::{QueryCallback, QueryEngine, QueryEngineBuilder};
pub use error::{EResultError, Result, ValidationError};
pub use factory::{CallFactory, CaptchaFactory, PageFactory, ResultFactory};
pub use models::{
    BoardType, CaptchaChallenge, DecodedCaptcha, ExamType, Field, QueryVariant, ResultDocument,
};
pub use query::{Query, QueryBuilder};
pub use session::Session;
