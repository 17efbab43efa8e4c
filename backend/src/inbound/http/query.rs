//! Query-string parameters for the catalogue listings.
//!
//! Browser filters send `All` to mean "no filter" and tag lists as
//! comma-separated values. Both conventions are resolved here so the domain
//! filters only ever see real predicates. Conversion never fails: a level or
//! flag outside the known set becomes a predicate that matches nothing.

use serde::Deserialize;
use serde_json::json;

use crate::domain::{Criterion, DestinationFilter, Error, ProgramFilter, RecordId};

const ANY: &str = "All";

/// Treat blank values and the `All` sentinel as absent.
fn active(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|value| !value.is_empty() && value != ANY)
}

fn tags(value: Option<String>) -> Vec<String> {
    active(value)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Record id taken from a path segment.
pub fn record_id(raw: &str) -> Result<RecordId, Error> {
    RecordId::new(raw).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": "id" }))
    })
}

/// `GET /api/destinations` and `/api/v1/catalogue/destinations*` filters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationQuery {
    pub country: Option<String>,
    pub study_level: Option<String>,
    pub search: Option<String>,
    pub documents: Option<String>,
    pub visas: Option<String>,
    pub exams: Option<String>,
}

impl From<DestinationQuery> for DestinationFilter {
    fn from(query: DestinationQuery) -> Self {
        Self {
            country: active(query.country),
            study_level: active(query.study_level).map(|raw| Criterion::parse(&raw)),
            search: active(query.search),
            documents: tags(query.documents),
            visas: tags(query.visas),
            exams: tags(query.exams),
        }
    }
}

/// `GET /api/v1/catalogue/programs` filters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub destination: Option<String>,
    pub study_level: Option<String>,
    pub field_of_study: Option<String>,
    pub ielts_required: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

fn flag(raw: String) -> Criterion<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Criterion::Is(true),
        "false" | "no" | "0" => Criterion::Is(false),
        _ => Criterion::Unknown(raw),
    }
}

impl From<ProgramQuery> for ProgramFilter {
    fn from(query: ProgramQuery) -> Self {
        Self {
            search: active(query.search),
            category: active(query.category),
            destination: active(query.destination),
            study_level: active(query.study_level),
            field_of_study: active(query.field_of_study),
            ielts_required: active(query.ielts_required).map(flag),
            min_price: query.min_price.filter(|value| value.is_finite()),
            max_price: query.max_price.filter(|value| value.is_finite()),
        }
    }
}
