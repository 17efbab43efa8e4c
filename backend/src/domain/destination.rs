//! Study destination records.
//!
//! A destination describes one country at one study level. The narrative
//! sections accept both free text and numbered rows; see [`Narrative`].

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record_id::RecordId;
use super::study_level::StudyLevel;

mod narrative;

pub use narrative::{Narrative, NarrativeItem};

/// Image shown when a record has none of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-logo.png";

/// Stored destination record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[schema(value_type = String, example = "9b2f3c9e-8f55-4d3c-9a0a-0d1c2e6b7f11")]
    pub id: RecordId,
    #[schema(example = "Canada")]
    pub country: String,
    pub study_level: StudyLevel,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub why_this_destination: Narrative,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub opportunities_while_studying: Narrative,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub opportunities_after_graduation: Narrative,
    #[serde(default)]
    pub documents_required: Vec<String>,
    #[serde(default)]
    pub visa_requirements: Vec<String>,
    #[serde(default)]
    pub international_exam_requirements: Vec<String>,
    #[serde(default = "placeholder_image")]
    pub image_url: String,
}

fn placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_owned()
}

/// Submitted destination fields, used for both creation and partial updates.
///
/// Any `id` in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationFields {
    pub country: Option<String>,
    #[schema(example = "Undergraduate")]
    pub study_level: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub why_this_destination: Option<Narrative>,
    #[schema(value_type = Option<Object>)]
    pub opportunities_while_studying: Option<Narrative>,
    #[schema(value_type = Option<Object>)]
    pub opportunities_after_graduation: Option<Narrative>,
    pub documents_required: Option<Vec<String>>,
    pub visa_requirements: Option<Vec<String>>,
    pub international_exam_requirements: Option<Vec<String>>,
    pub image_url: Option<String>,
}

/// Reasons submitted destination fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationValidationError {
    /// Creation requires both a country and a study level.
    MissingRequired,
    /// An update supplied an empty country.
    BlankCountry,
    /// The study level is not one of the known values.
    InvalidStudyLevel { value: String },
}

impl fmt::Display for DestinationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "country and studyLevel are required"),
            Self::BlankCountry => write!(f, "country must not be empty"),
            Self::InvalidStudyLevel { value } => write!(
                f,
                "studyLevel `{value}` is not one of Undergraduate or Postgraduate"
            ),
        }
    }
}

impl std::error::Error for DestinationValidationError {}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_level(raw: &str) -> Result<StudyLevel, DestinationValidationError> {
    raw.parse()
        .map_err(|_| DestinationValidationError::InvalidStudyLevel {
            value: raw.to_owned(),
        })
}

impl Destination {
    /// Build a new record from submitted fields, applying defaults.
    ///
    /// # Examples
    /// ```
    /// use scholar::domain::{Destination, DestinationFields, RecordId, StudyLevel};
    ///
    /// let fields = DestinationFields {
    ///     country: Some("Canada".into()),
    ///     study_level: Some("Undergraduate".into()),
    ///     ..DestinationFields::default()
    /// };
    /// let created = Destination::from_fields(RecordId::random(), fields).expect("valid");
    /// assert_eq!(created.study_level, StudyLevel::Undergraduate);
    /// assert_eq!(created.image_url, "/placeholder-logo.png");
    /// ```
    pub fn from_fields(
        id: RecordId,
        fields: DestinationFields,
    ) -> Result<Self, DestinationValidationError> {
        let DestinationFields {
            country,
            study_level,
            why_this_destination,
            opportunities_while_studying,
            opportunities_after_graduation,
            documents_required,
            visa_requirements,
            international_exam_requirements,
            image_url,
        } = fields;

        let (Some(country), Some(level)) = (non_blank(country), non_blank(study_level)) else {
            return Err(DestinationValidationError::MissingRequired);
        };

        Ok(Self {
            id,
            country,
            study_level: parse_level(&level)?,
            why_this_destination: why_this_destination.unwrap_or_default(),
            opportunities_while_studying: opportunities_while_studying.unwrap_or_default(),
            opportunities_after_graduation: opportunities_after_graduation.unwrap_or_default(),
            documents_required: documents_required.unwrap_or_default(),
            visa_requirements: visa_requirements.unwrap_or_default(),
            international_exam_requirements: international_exam_requirements.unwrap_or_default(),
            image_url: non_blank(image_url).unwrap_or_else(placeholder_image),
        })
    }

    /// Overwrite the supplied fields, keeping the id and everything absent.
    ///
    /// Validation happens before any field is touched, so a rejected patch
    /// leaves the record unchanged.
    pub fn apply_fields(
        &mut self,
        fields: DestinationFields,
    ) -> Result<(), DestinationValidationError> {
        if fields
            .country
            .as_deref()
            .is_some_and(|country| country.trim().is_empty())
        {
            return Err(DestinationValidationError::BlankCountry);
        }
        let level = fields.study_level.as_deref().map(parse_level).transpose()?;

        if let Some(country) = fields.country {
            self.country = country;
        }
        if let Some(level) = level {
            self.study_level = level;
        }
        if let Some(value) = fields.why_this_destination {
            self.why_this_destination = value;
        }
        if let Some(value) = fields.opportunities_while_studying {
            self.opportunities_while_studying = value;
        }
        if let Some(value) = fields.opportunities_after_graduation {
            self.opportunities_after_graduation = value;
        }
        if let Some(value) = fields.documents_required {
            self.documents_required = value;
        }
        if let Some(value) = fields.visa_requirements {
            self.visa_requirements = value;
        }
        if let Some(value) = fields.international_exam_requirements {
            self.international_exam_requirements = value;
        }
        if let Some(value) = fields.image_url {
            self.image_url = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
