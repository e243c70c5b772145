//! Query description and validation.
//!
//! A [`QueryBuilder`] collects identifying parameters without complaint; only
//! [`QueryBuilder::build`] decides whether they are enough for the chosen
//! [`QueryVariant`]. What "enough" means lives in one table,
//! [`required_fields`], so the rules are stated exactly once.

use crate::error::ValidationError;
use crate::models::{BoardType, ExamType, Field, QueryVariant};
use serde::{Deserialize, Serialize};

/// Fields each variant must carry, in the order they are checked.
const REQUIRED_FIELDS: &[(QueryVariant, &[Field])] = &[
    (
        QueryVariant::Individual,
        &[
            Field::Year,
            Field::StudentRollNumber,
            Field::RegistrationId,
            Field::ExamType,
            Field::BoardType,
        ],
    ),
    (
        QueryVariant::Institution,
        &[
            Field::Year,
            Field::EiinCode,
            Field::ExamType,
            Field::BoardType,
        ],
    ),
    (
        QueryVariant::Center,
        &[
            Field::Year,
            Field::CenterCode,
            Field::DistrictCode,
            Field::ExamType,
            Field::BoardType,
        ],
    ),
    (
        QueryVariant::District,
        &[
            Field::Year,
            Field::DistrictCode,
            Field::ExamType,
            Field::BoardType,
        ],
    ),
];

/// Required fields for a variant, or `None` when the variant is unsupported.
pub fn required_fields(variant: QueryVariant) -> Option<&'static [Field]> {
    REQUIRED_FIELDS
        .iter()
        .find(|(candidate, _)| *candidate == variant)
        .map(|(_, fields)| *fields)
}

/// Accumulates query parameters.
///
/// Setters never fail. The builder can also be deserialized, e.g. from a JSON
/// description of the query, and validated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryBuilder {
    #[serde(rename = "result_type")]
    variant: Option<QueryVariant>,
    year: Option<String>,
    exam_type: Option<ExamType>,
    board_type: Option<BoardType>,
    registration_id: Option<String>,
    student_roll_number: Option<String>,
    eiin_code: Option<String>,
    center_code: Option<String>,
    district_code: Option<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result type (query variant).
    pub fn variant(mut self, variant: QueryVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set the examination year, e.g. `"2024"`.
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn exam_type(mut self, exam_type: ExamType) -> Self {
        self.exam_type = Some(exam_type);
        self
    }

    pub fn board_type(mut self, board_type: BoardType) -> Self {
        self.board_type = Some(board_type);
        self
    }

    pub fn registration_id(mut self, registration_id: impl Into<String>) -> Self {
        self.registration_id = Some(registration_id.into());
        self
    }

    pub fn student_roll_number(mut self, roll: impl Into<String>) -> Self {
        self.student_roll_number = Some(roll.into());
        self
    }

    /// Set the Educational Institution Identification Number.
    pub fn eiin_code(mut self, eiin_code: impl Into<String>) -> Self {
        self.eiin_code = Some(eiin_code.into());
        self
    }

    pub fn center_code(mut self, center_code: impl Into<String>) -> Self {
        self.center_code = Some(center_code.into());
        self
    }

    pub fn district_code(mut self, district_code: impl Into<String>) -> Self {
        self.district_code = Some(district_code.into());
        self
    }

    /// Validate the collected parameters and produce an immutable [`Query`].
    ///
    /// Blank strings count as absent. The first missing field in the
    /// variant's [`required_fields`] order is reported.
    pub fn build(&self) -> Result<Query, ValidationError> {
        let variant = self.variant.ok_or(ValidationError::MissingVariant)?;
        let required = required_fields(variant).ok_or(ValidationError::Unsupported(variant))?;

        if let Some(missing) = required.iter().copied().find(|field| !self.is_set(*field)) {
            return Err(ValidationError::MissingRequiredField(missing));
        }

        tracing::debug!(%variant, "query validated");

        Ok(Query {
            variant,
            year: non_blank(&self.year),
            exam_type: self.exam_type,
            board_type: self.board_type,
            registration_id: non_blank(&self.registration_id),
            student_roll_number: non_blank(&self.student_roll_number),
            eiin_code: non_blank(&self.eiin_code),
            center_code: non_blank(&self.center_code),
            district_code: non_blank(&self.district_code),
        })
    }

    fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Variant => self.variant.is_some(),
            Field::Year => non_blank(&self.year).is_some(),
            Field::ExamType => self.exam_type.is_some(),
            Field::BoardType => self.board_type.is_some(),
            Field::RegistrationId => non_blank(&self.registration_id).is_some(),
            Field::StudentRollNumber => non_blank(&self.student_roll_number).is_some(),
            Field::EiinCode => non_blank(&self.eiin_code).is_some(),
            Field::CenterCode => non_blank(&self.center_code).is_some(),
            Field::DistrictCode => non_blank(&self.district_code).is_some(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A validated result query.
///
/// Only obtainable through [`QueryBuilder::build`], so every `Query` carries
/// the fields its variant requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    variant: QueryVariant,
    year: Option<String>,
    exam_type: Option<ExamType>,
    board_type: Option<BoardType>,
    registration_id: Option<String>,
    student_roll_number: Option<String>,
    eiin_code: Option<String>,
    center_code: Option<String>,
    district_code: Option<String>,
}

impl Query {
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    pub fn variant(&self) -> QueryVariant {
        self.variant
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn exam_type(&self) -> Option<ExamType> {
        self.exam_type
    }

    pub fn board_type(&self) -> Option<BoardType> {
        self.board_type
    }

    pub fn registration_id(&self) -> Option<&str> {
        self.registration_id.as_deref()
    }

    pub fn student_roll_number(&self) -> Option<&str> {
        self.student_roll_number.as_deref()
    }

    pub fn eiin_code(&self) -> Option<&str> {
        self.eiin_code.as_deref()
    }

    pub fn center_code(&self) -> Option<&str> {
        self.center_code.as_deref()
    }

    pub fn district_code(&self) -> Option<&str> {
        self.district_code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_field(builder: QueryBuilder, field: Field) -> QueryBuilder {
        match field {
            Field::Variant => builder,
            Field::Year => builder.year("2024"),
            Field::ExamType => builder.exam_type(ExamType::Ssc),
            Field::BoardType => builder.board_type(BoardType::Dhaka),
            Field::RegistrationId => builder.registration_id("1814794298"),
            Field::StudentRollNumber => builder.student_roll_number("100826"),
            Field::EiinCode => builder.eiin_code("108123"),
            Field::CenterCode => builder.center_code("101"),
            Field::DistrictCode => builder.district_code("26"),
        }
    }

    const SUPPORTED: [QueryVariant; 4] = [
        QueryVariant::Individual,
        QueryVariant::Institution,
        QueryVariant::Center,
        QueryVariant::District,
    ];

    #[test]
    fn test_required_fields_only_succeeds() {
        for variant in SUPPORTED {
            let required = required_fields(variant).unwrap();
            let builder = required
                .iter()
                .fold(QueryBuilder::new().variant(variant), |b, f| with_field(b, *f));

            let query = builder.build().unwrap();
            assert_eq!(query.variant(), variant);
        }
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for variant in SUPPORTED {
            let required = required_fields(variant).unwrap();
            for omitted in required {
                let builder = required
                    .iter()
                    .filter(|f| *f != omitted)
                    .fold(QueryBuilder::new().variant(variant), |b, f| with_field(b, *f));

                assert_eq!(
                    builder.build(),
                    Err(ValidationError::MissingRequiredField(*omitted)),
                    "{variant} without {omitted}"
                );
            }
        }
    }

    #[test]
    fn test_board_is_unsupported() {
        let everything = [
            Field::Year,
            Field::ExamType,
            Field::BoardType,
            Field::RegistrationId,
            Field::StudentRollNumber,
            Field::EiinCode,
            Field::CenterCode,
            Field::DistrictCode,
        ];
        let full = everything
            .iter()
            .fold(QueryBuilder::new().variant(QueryVariant::Board), |b, f| with_field(b, *f));

        assert_eq!(full.build(), Err(ValidationError::Unsupported(QueryVariant::Board)));
        assert_eq!(
            QueryBuilder::new().variant(QueryVariant::Board).build(),
            Err(ValidationError::Unsupported(QueryVariant::Board))
        );
    }

    #[test]
    fn test_missing_variant() {
        let builder = QueryBuilder::new()
            .year("2024")
            .exam_type(ExamType::Ssc)
            .board_type(BoardType::Dhaka);
        assert_eq!(builder.build(), Err(ValidationError::MissingVariant));
    }

    #[test]
    fn test_check_order() {
        let builder = QueryBuilder::new().variant(QueryVariant::Institution);
        assert_eq!(
            builder.build(),
            Err(ValidationError::MissingRequiredField(Field::Year))
        );

        let builder = builder.year("2024").board_type(BoardType::Sylhet);
        assert_eq!(
            builder.build(),
            Err(ValidationError::MissingRequiredField(Field::EiinCode))
        );

        let builder = builder.eiin_code("100200");
        assert_eq!(
            builder.build(),
            Err(ValidationError::MissingRequiredField(Field::ExamType))
        );
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let builder = QueryBuilder::new()
            .variant(QueryVariant::District)
            .year("2024")
            .district_code("   ")
            .exam_type(ExamType::Hsc)
            .board_type(BoardType::Rajshahi);
        assert_eq!(
            builder.build(),
            Err(ValidationError::MissingRequiredField(Field::DistrictCode))
        );
    }

    #[test]
    fn test_build_leaves_previous_query_untouched() {
        let builder = QueryBuilder::new()
            .variant(QueryVariant::District)
            .year("2023")
            .district_code("26")
            .exam_type(ExamType::Hsc)
            .board_type(BoardType::Rajshahi);
        let first = builder.build().unwrap();

        let second = builder.clone().year("2024").build().unwrap();
        assert_eq!(first.year(), Some("2023"));
        assert_eq!(second.year(), Some("2024"));
    }

    #[test]
    fn test_builder_from_json() {
        let json = r#"{
            "result_type": "individual",
            "year": "2024",
            "exam_type": "ssc",
            "board_type": "chittagong",
            "registration_id": "1814794298",
            "student_roll_number": "100826"
        }"#;
        let builder: QueryBuilder = serde_json::from_str(json).unwrap();
        let query = builder.build().unwrap();

        assert_eq!(query.variant(), QueryVariant::Individual);
        assert_eq!(query.board_type(), Some(BoardType::Chittagong));
        assert_eq!(query.student_roll_number(), Some("100826"));
        assert_eq!(query.eiin_code(), None);
    }
}
