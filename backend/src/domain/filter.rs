//! Catalogue filtering and grouping.
//!
//! Every predicate is optional and predicates combine with logical AND.
//! Filtering keeps input order and never fails; no match is an empty list.

use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use super::destination::Destination;
use super::program::Program;
use super::study_level::StudyLevel;

/// A requested value, or one that no record can hold.
///
/// Query strings may name a level or flag outside the known set. Such a
/// request matches nothing instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion<T> {
    /// Records must hold this value.
    Is(T),
    /// The raw request, which no record satisfies.
    Unknown(String),
}

impl<T> Criterion<T> {
    /// The requested value when it is a known one.
    #[must_use]
    pub const fn known(&self) -> Option<&T> {
        match self {
            Self::Is(value) => Some(value),
            Self::Unknown(_) => None,
        }
    }
}

impl<T: PartialEq> Criterion<T> {
    /// Whether `value` satisfies the criterion.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        matches!(self, Self::Is(wanted) if wanted == value)
    }
}

impl<T: FromStr> Criterion<T> {
    /// Parse `raw`, keeping unparseable input as [`Criterion::Unknown`].
    ///
    /// # Examples
    /// ```
    /// use scholar::domain::{Criterion, StudyLevel};
    ///
    /// let level = Criterion::<StudyLevel>::parse("PhD");
    /// assert!(!level.admits(&StudyLevel::Postgraduate));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse()
            .map_or_else(|_| Self::Unknown(raw.to_owned()), Self::Is)
    }
}

/// Destination predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationFilter {
    /// Exact country match.
    pub country: Option<String>,
    /// Exact study level match.
    pub study_level: Option<Criterion<StudyLevel>>,
    /// Case-insensitive substring of the country.
    pub search: Option<String>,
    /// Every listed document must be required by the destination.
    pub documents: Vec<String>,
    /// Every listed visa requirement must be present.
    pub visas: Vec<String>,
    /// Every listed exam requirement must be present.
    pub exams: Vec<String>,
}

fn contains_all(haystack: &[String], needles: &[String]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl DestinationFilter {
    /// Whether `destination` satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        self.country
            .as_deref()
            .is_none_or(|country| destination.country == country)
            && self
                .study_level
                .as_ref()
                .is_none_or(|level| level.admits(&destination.study_level))
            && self
                .search
                .as_deref()
                .is_none_or(|term| contains_ignore_case(&destination.country, term))
            && contains_all(&destination.documents_required, &self.documents)
            && contains_all(&destination.visa_requirements, &self.visas)
            && contains_all(&destination.international_exam_requirements, &self.exams)
    }

    /// Keep the matching destinations in their original order.
    #[must_use]
    pub fn apply(&self, destinations: Vec<Destination>) -> Vec<Destination> {
        destinations.into_iter().filter(|d| self.matches(d)).collect()
    }
}

/// Program predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramFilter {
    /// Case-insensitive substring of the name or description.
    pub search: Option<String>,
    pub category: Option<String>,
    pub destination: Option<String>,
    pub study_level: Option<String>,
    pub field_of_study: Option<String>,
    /// Compared against the stored flag, absent counting as `false`.
    pub ielts_required: Option<Criterion<bool>>,
    /// Inclusive lower bound on the derived price amount.
    pub min_price: Option<f64>,
    /// Inclusive upper bound on the derived price amount.
    pub max_price: Option<f64>,
}

fn equals_when_set(expected: Option<&str>, actual: Option<&str>) -> bool {
    expected.is_none_or(|value| actual == Some(value))
}

impl ProgramFilter {
    fn price_range_active(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }

    fn matches_price(&self, program: &Program) -> bool {
        if !self.price_range_active() {
            return true;
        }
        let Some(amount) = program.price.amount() else {
            return false;
        };
        self.min_price.is_none_or(|min| amount >= min)
            && self.max_price.is_none_or(|max| amount <= max)
    }

    /// Whether `program` satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, program: &Program) -> bool {
        self.search.as_deref().is_none_or(|term| {
            contains_ignore_case(&program.name, term)
                || contains_ignore_case(&program.description, term)
        }) && equals_when_set(self.category.as_deref(), Some(program.category.as_str()))
            && equals_when_set(self.destination.as_deref(), program.destination.as_deref())
            && equals_when_set(self.study_level.as_deref(), program.study_level.as_deref())
            && equals_when_set(
                self.field_of_study.as_deref(),
                program.field_of_study.as_deref(),
            )
            && self
                .ielts_required
                .as_ref()
                .is_none_or(|wanted| wanted.admits(&program.ielts_required.unwrap_or(false)))
            && self.matches_price(program)
    }

    /// Keep the matching programs in their original order.
    #[must_use]
    pub fn apply(&self, programs: Vec<Program>) -> Vec<Program> {
        programs.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Destinations of one country as shown by the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryGroup {
    #[schema(example = "Canada")]
    pub country: String,
    pub destinations: Vec<Destination>,
}

/// Group destinations by country in first-seen order.
///
/// Each group holds at most the first undergraduate and the first
/// postgraduate row, narrowed to `level` when one is given. Countries left
/// without rows are omitted.
#[must_use]
pub fn group_by_country(
    destinations: Vec<Destination>,
    level: Option<StudyLevel>,
) -> Vec<CountryGroup> {
    let mut groups: Vec<CountryGroup> = Vec::new();
    for destination in destinations {
        if level.is_some_and(|wanted| destination.study_level != wanted) {
            continue;
        }
        match groups
            .iter_mut()
            .find(|group| group.country == destination.country)
        {
            Some(group) => {
                let taken = group
                    .destinations
                    .iter()
                    .any(|existing| existing.study_level == destination.study_level);
                if !taken {
                    group.destinations.push(destination);
                }
            }
            None => groups.push(CountryGroup {
                country: destination.country.clone(),
                destinations: vec![destination],
            }),
        }
    }
    for group in &mut groups {
        group.destinations.sort_by_key(|d| match d.study_level {
            StudyLevel::Undergraduate => 0,
            StudyLevel::Postgraduate => 1,
        });
    }
    groups
}

/// Distinct countries in first-seen order.
#[must_use]
pub fn distinct_countries(destinations: &[Destination]) -> Vec<String> {
    let mut countries: Vec<String> = Vec::new();
    for destination in destinations {
        if !countries.contains(&destination.country) {
            countries.push(destination.country.clone());
        }
    }
    countries
}

#[cfg(test)]
mod tests;
