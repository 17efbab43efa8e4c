//! Narrative sections of a destination.
//!
//! A section is either free text or an ordered list of numbered rows. Older
//! stored data encodes the rows as a JSON string containing an array; that
//! form is decoded into rows on read and written back as a plain array.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One numbered row of a narrative section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NarrativeItem {
    #[serde(default)]
    pub no: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Free text or structured rows.
///
/// # Examples
/// ```
/// use scholar::domain::Narrative;
///
/// let legacy: Narrative =
///     serde_json::from_str(r#""[{\"no\":\"1\",\"title\":\"Jobs\"}]""#).expect("valid");
/// assert_eq!(legacy.items().map(<[_]>::len), Some(1));
///
/// let text: Narrative = serde_json::from_str(r#""Great universities""#).expect("valid");
/// assert_eq!(text, Narrative::Text("Great universities".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NarrativeRepr", into = "NarrativeRepr")]
pub enum Narrative {
    Text(String),
    Items(Vec<NarrativeItem>),
}

impl Narrative {
    /// Rows of a structured section, `None` for free text.
    #[must_use]
    pub fn items(&self) -> Option<&[NarrativeItem]> {
        match self {
            Self::Items(items) => Some(items.as_slice()),
            Self::Text(_) => None,
        }
    }
}

impl Default for Narrative {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum NarrativeRepr {
    Items(Vec<NarrativeItem>),
    Text(String),
}

impl From<NarrativeRepr> for Narrative {
    fn from(value: NarrativeRepr) -> Self {
        match value {
            NarrativeRepr::Items(items) => Self::Items(items),
            NarrativeRepr::Text(text) => decode_legacy_text(text),
        }
    }
}

impl From<Narrative> for NarrativeRepr {
    fn from(value: Narrative) -> Self {
        match value {
            Narrative::Items(items) => Self::Items(items),
            Narrative::Text(text) => Self::Text(text),
        }
    }
}

fn decode_legacy_text(text: String) -> Narrative {
    if !text.trim_start().starts_with('[') {
        return Narrative::Text(text);
    }
    match serde_json::from_str::<Vec<NarrativeItem>>(&text) {
        Ok(items) => Narrative::Items(items),
        Err(_) => Narrative::Text(text),
    }
}
