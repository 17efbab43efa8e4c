//! Listed study programs.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::destination::PLACEHOLDER_IMAGE;
use super::record_id::RecordId;

mod price;

pub use price::Price;

const DEFAULT_CATEGORY: &str = "Undergraduate";
const DEFAULT_RATING: f64 = 4.5;
const DEFAULT_DESTINATION: &str = "USA";
const DEFAULT_FIELD_OF_STUDY: &str = "General";

/// Stored program record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[schema(value_type = String, example = "1")]
    pub id: RecordId,
    #[schema(example = "Computer Science BSc - USA")]
    pub name: String,
    #[schema(value_type = String, example = "$25,000")]
    pub price: Price,
    pub image: String,
    pub description: String,
    pub category: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ielts_required: Option<bool>,
}

/// Submitted program fields for creation and partial updates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramFields {
    pub name: Option<String>,
    #[schema(example = "$10,000")]
    pub price: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub destination: Option<String>,
    pub study_level: Option<String>,
    pub field_of_study: Option<String>,
    pub ielts_required: Option<bool>,
}

/// Reasons submitted program fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramValidationError {
    /// Creation requires a name, a price and a description.
    MissingRequired,
    /// An update supplied an empty value for a required field.
    BlankField { field: &'static str },
}

impl fmt::Display for ProgramValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "name, price and description are required"),
            Self::BlankField { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for ProgramValidationError {}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Program {
    /// Build a new program from submitted fields, applying defaults.
    ///
    /// The study level falls back to the category when not supplied.
    pub fn from_fields(id: RecordId, fields: ProgramFields) -> Result<Self, ProgramValidationError> {
        let ProgramFields {
            name,
            price,
            image,
            description,
            category,
            rating,
            destination,
            study_level,
            field_of_study,
            ielts_required,
        } = fields;

        let (Some(name), Some(price), Some(description)) =
            (non_blank(name), non_blank(price), non_blank(description))
        else {
            return Err(ProgramValidationError::MissingRequired);
        };

        let category = non_blank(category).unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());
        let study_level = non_blank(study_level).unwrap_or_else(|| category.clone());

        Ok(Self {
            id,
            name,
            price: Price::from(price),
            image: non_blank(image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
            description,
            category,
            rating: rating.unwrap_or(DEFAULT_RATING),
            destination: Some(
                non_blank(destination).unwrap_or_else(|| DEFAULT_DESTINATION.to_owned()),
            ),
            study_level: Some(study_level),
            field_of_study: Some(
                non_blank(field_of_study).unwrap_or_else(|| DEFAULT_FIELD_OF_STUDY.to_owned()),
            ),
            ielts_required: Some(ielts_required.unwrap_or(false)),
        })
    }

    /// Overwrite the supplied fields, keeping the id and everything absent.
    pub fn apply_fields(&mut self, fields: ProgramFields) -> Result<(), ProgramValidationError> {
        for (field, value) in [
            ("name", &fields.name),
            ("price", &fields.price),
            ("description", &fields.description),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ProgramValidationError::BlankField { field });
            }
        }

        if let Some(value) = fields.name {
            self.name = value;
        }
        if let Some(value) = fields.price {
            self.price = Price::from(value);
        }
        if let Some(value) = fields.image {
            self.image = value;
        }
        if let Some(value) = fields.description {
            self.description = value;
        }
        if let Some(value) = fields.category {
            self.category = value;
        }
        if let Some(value) = fields.rating {
            self.rating = value;
        }
        if fields.destination.is_some() {
            self.destination = fields.destination;
        }
        if fields.study_level.is_some() {
            self.study_level = fields.study_level;
        }
        if fields.field_of_study.is_some() {
            self.field_of_study = fields.field_of_study;
        }
        if fields.ielts_required.is_some() {
            self.ielts_required = fields.ielts_required;
        }
        Ok(())
    }
}
