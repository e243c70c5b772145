//! Data models for eboardresults.com queries.

use crate::error::ValidationError;
use crate::session::Session;
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Shape of a result query. Each variant requires its own set of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryVariant {
    /// Result for an entire board (not served by the remote site)
    Board,
    /// Result of a single student
    Individual,
    /// Result sheet of an institution, identified by EIIN
    Institution,
    /// Result sheet of an examination center
    Center,
    /// Result summary of a district
    District,
}

impl QueryVariant {
    /// Numeric `result_type` sent to the result endpoint.
    ///
    /// Board queries have no discriminant and are rejected locally.
    pub fn discriminant(&self) -> Option<&'static str> {
        match self {
            QueryVariant::Board => None,
            QueryVariant::Individual => Some("1"),
            QueryVariant::Institution => Some("2"),
            QueryVariant::Center => Some("3"),
            QueryVariant::District => Some("4"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryVariant::Board => "board",
            QueryVariant::Individual => "individual",
            QueryVariant::Institution => "institution",
            QueryVariant::Center => "center",
            QueryVariant::District => "district",
        }
    }
}

impl std::fmt::Display for QueryVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryVariant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "board" => Ok(QueryVariant::Board),
            "individual" => Ok(QueryVariant::Individual),
            "institution" => Ok(QueryVariant::Institution),
            "center" => Ok(QueryVariant::Center),
            "district" => Ok(QueryVariant::District),
            _ => Err(ValidationError::UnknownValue {
                field: Field::Variant,
                value: s.to_string(),
            }),
        }
    }
}

/// Public examinations published on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    /// Junior School Certificate
    Jsc,
    /// Secondary School Certificate
    Ssc,
    /// Higher Secondary Certificate
    Hsc,
}

impl ExamType {
    /// Lower-cased name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Jsc => "jsc",
            ExamType::Ssc => "ssc",
            ExamType::Hsc => "hsc",
        }
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jsc" => Ok(ExamType::Jsc),
            "ssc" => Ok(ExamType::Ssc),
            "hsc" => Ok(ExamType::Hsc),
            _ => Err(ValidationError::UnknownValue {
                field: Field::ExamType,
                value: s.to_string(),
            }),
        }
    }
}

/// Education boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    Barisal,
    Chittagong,
    Cumilla,
    Dhaka,
    Dinajpur,
    Jashore,
    Madrasah,
    Rajshahi,
    Sylhet,
    Mymensingh,
    Technical,
}

impl BoardType {
    pub const ALL: [BoardType; 11] = [
        BoardType::Barisal,
        BoardType::Chittagong,
        BoardType::Cumilla,
        BoardType::Dhaka,
        BoardType::Dinajpur,
        BoardType::Jashore,
        BoardType::Madrasah,
        BoardType::Rajshahi,
        BoardType::Sylhet,
        BoardType::Mymensingh,
        BoardType::Technical,
    ];

    /// Lower-cased name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardType::Barisal => "barisal",
            BoardType::Chittagong => "chittagong",
            BoardType::Cumilla => "cumilla",
            BoardType::Dhaka => "dhaka",
            BoardType::Dinajpur => "dinajpur",
            BoardType::Jashore => "jashore",
            BoardType::Madrasah => "madrasah",
            BoardType::Rajshahi => "rajshahi",
            BoardType::Sylhet => "sylhet",
            BoardType::Mymensingh => "mymensingh",
            BoardType::Technical => "technical",
        }
    }
}

impl std::fmt::Display for BoardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BoardType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BoardType::ALL
            .iter()
            .copied()
            .find(|board| board.as_str() == wanted)
            .ok_or_else(|| ValidationError::UnknownValue {
                field: Field::BoardType,
                value: s.to_string(),
            })
    }
}

/// Named query attributes, used when reporting validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Variant,
    Year,
    ExamType,
    BoardType,
    RegistrationId,
    StudentRollNumber,
    EiinCode,
    CenterCode,
    DistrictCode,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Variant => "result type",
            Field::Year => "year",
            Field::ExamType => "exam type",
            Field::BoardType => "board type",
            Field::RegistrationId => "registration id",
            Field::StudentRollNumber => "student roll number",
            Field::EiinCode => "eiin code",
            Field::CenterCode => "center code",
            Field::DistrictCode => "district code",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Captcha image returned by the captcha endpoint.
#[derive(Debug, Clone)]
pub struct DecodedCaptcha {
    bytes: Vec<u8>,
    image: DynamicImage,
}

impl DecodedCaptcha {
    pub(crate) fn new(bytes: Vec<u8>, image: DynamicImage) -> Self {
        Self { bytes, image }
    }

    /// Raw image bytes as served.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decoded image, ready for display.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

/// Outcome of the captcha phase: the image to show a human and the session
/// token the result phase must present.
#[derive(Debug, Clone)]
pub struct CaptchaChallenge {
    pub captcha: DecodedCaptcha,
    pub session: Session,
}

/// Result page returned verbatim by the result endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultDocument(String);

impl ResultDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ResultDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
