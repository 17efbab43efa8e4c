//! Tests for catalogue filters and grouping.

use super::*;
use crate::domain::destination::Narrative;
use crate::domain::program::ProgramFields;
use crate::domain::record_id::RecordId;
use rstest::{fixture, rstest};

fn destination(id: &str, country: &str, level: StudyLevel, documents: &[&str]) -> Destination {
    Destination {
        id: RecordId::new(id).expect("id"),
        country: country.to_owned(),
        study_level: level,
        why_this_destination: Narrative::default(),
        opportunities_while_studying: Narrative::default(),
        opportunities_after_graduation: Narrative::default(),
        documents_required: documents.iter().map(|d| (*d).to_owned()).collect(),
        visa_requirements: Vec::new(),
        international_exam_requirements: vec!["IELTS".to_owned()],
        image_url: String::new(),
    }
}

#[fixture]
fn destinations() -> Vec<Destination> {
    vec![
        destination("1", "USA", StudyLevel::Undergraduate, &["Passport", "Transcript"]),
        destination("2", "UK", StudyLevel::Postgraduate, &["Passport"]),
        destination("3", "USA", StudyLevel::Postgraduate, &["Passport", "CV"]),
        destination("4", "USA", StudyLevel::Postgraduate, &[]),
        destination("5", "Canada", StudyLevel::Undergraduate, &["Transcript"]),
    ]
}

fn ids(items: &[Destination]) -> Vec<&str> {
    items.iter().map(|d| d.id.as_ref()).collect()
}

#[rstest]
fn empty_filter_keeps_everything(destinations: Vec<Destination>) {
    let kept = DestinationFilter::default().apply(destinations.clone());
    assert_eq!(kept, destinations);
}

#[rstest]
fn country_filter_returns_only_that_country(destinations: Vec<Destination>) {
    let filter = DestinationFilter {
        country: Some("USA".to_owned()),
        ..DestinationFilter::default()
    };
    assert_eq!(ids(&filter.apply(destinations)), vec!["1", "3", "4"]);
}

#[rstest]
fn country_and_level_intersect(destinations: Vec<Destination>) {
    let filter = DestinationFilter {
        country: Some("USA".to_owned()),
        study_level: Some(Criterion::Is(StudyLevel::Postgraduate)),
        ..DestinationFilter::default()
    };
    assert_eq!(ids(&filter.apply(destinations)), vec!["3", "4"]);
}

#[rstest]
fn unknown_level_matches_nothing(destinations: Vec<Destination>) {
    let filter = DestinationFilter {
        study_level: Some(Criterion::parse("PhD")),
        ..DestinationFilter::default()
    };
    assert_eq!(filter.study_level, Some(Criterion::Unknown("PhD".to_owned())));
    assert!(filter.apply(destinations).is_empty());
}

#[rstest]
fn no_match_yields_empty(destinations: Vec<Destination>) {
    let filter = DestinationFilter {
        country: Some("Japan".to_owned()),
        ..DestinationFilter::default()
    };
    assert!(filter.apply(destinations).is_empty());
}

#[rstest]
#[case("us", vec!["1", "3", "4"])]
#[case("CAN", vec!["5"])]
fn search_is_case_insensitive(
    destinations: Vec<Destination>,
    #[case] term: &str,
    #[case] expected: Vec<&str>,
) {
    let filter = DestinationFilter {
        search: Some(term.to_owned()),
        ..DestinationFilter::default()
    };
    assert_eq!(ids(&filter.apply(destinations)), expected);
}

#[rstest]
fn tag_filters_require_every_tag(destinations: Vec<Destination>) {
    let filter = DestinationFilter {
        documents: vec!["Passport".to_owned(), "Transcript".to_owned()],
        exams: vec!["IELTS".to_owned()],
        ..DestinationFilter::default()
    };
    assert_eq!(ids(&filter.apply(destinations)), vec!["1"]);
}

#[rstest]
fn grouping_keeps_first_row_per_level(destinations: Vec<Destination>) {
    let groups = group_by_country(destinations, None);
    let summary: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|g| (g.country.as_str(), ids(&g.destinations)))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("USA", vec!["1", "3"]),
            ("UK", vec!["2"]),
            ("Canada", vec!["5"]),
        ]
    );
}

#[rstest]
fn grouping_by_level_omits_empty_countries(destinations: Vec<Destination>) {
    let groups = group_by_country(destinations, Some(StudyLevel::Undergraduate));
    let countries: Vec<&str> = groups.iter().map(|g| g.country.as_str()).collect();
    assert_eq!(countries, vec!["USA", "Canada"]);
}

#[rstest]
fn grouping_orders_undergraduate_first() {
    let rows = vec![
        destination("a", "UK", StudyLevel::Postgraduate, &[]),
        destination("b", "UK", StudyLevel::Undergraduate, &[]),
    ];
    let groups = group_by_country(rows, None);
    let uk = groups.first().expect("one group");
    assert_eq!(ids(&uk.destinations), vec!["b", "a"]);
}

#[rstest]
fn countries_are_distinct_in_first_seen_order(destinations: Vec<Destination>) {
    assert_eq!(distinct_countries(&destinations), vec!["USA", "UK", "Canada"]);
}

fn program(name: &str, price: &str, category: &str, ielts: Option<bool>) -> Program {
    let mut program = Program::from_fields(
        RecordId::random(),
        ProgramFields {
            name: Some(name.to_owned()),
            price: Some(price.to_owned()),
            description: Some(format!("{name} description")),
            category: Some(category.to_owned()),
            ..ProgramFields::default()
        },
    )
    .expect("valid program");
    program.ielts_required = ielts;
    program
}

#[fixture]
fn programs() -> Vec<Program> {
    vec![
        program("Computer Science BSc", "$25,000", "Undergraduate", Some(true)),
        program("MBA", "$35,000", "Postgraduate", Some(true)),
        program("Engineering MSc", "$1,500", "Postgraduate", None),
        program("Medicine MD", "price on request", "Postgraduate", Some(true)),
    ]
}

fn names(items: &[Program]) -> Vec<&str> {
    items.iter().map(|p| p.name.as_str()).collect()
}

#[rstest]
fn program_search_matches_name_or_description(programs: Vec<Program>) {
    let filter = ProgramFilter {
        search: Some("mba DESC".to_owned()),
        ..ProgramFilter::default()
    };
    assert_eq!(names(&filter.apply(programs)), vec!["MBA"]);
}

#[rstest]
fn unknown_ielts_flag_matches_nothing(programs: Vec<Program>) {
    let filter = ProgramFilter {
        ielts_required: Some(Criterion::Unknown("sometimes".to_owned())),
        ..ProgramFilter::default()
    };
    assert!(filter.apply(programs).is_empty());
}

#[rstest]
fn absent_ielts_flag_counts_as_false(programs: Vec<Program>) {
    let filter = ProgramFilter {
        ielts_required: Some(Criterion::Is(false)),
        ..ProgramFilter::default()
    };
    assert_eq!(names(&filter.apply(programs)), vec!["Engineering MSc"]);
}

#[rstest]
#[case(Some(1_500.0), Some(25_000.0), vec!["Computer Science BSc", "Engineering MSc"])]
#[case(Some(30_000.0), None, vec!["MBA"])]
#[case(None, Some(1_499.0), vec![])]
fn price_range_is_inclusive_and_skips_unparseable(
    programs: Vec<Program>,
    #[case] min_price: Option<f64>,
    #[case] max_price: Option<f64>,
    #[case] expected: Vec<&str>,
) {
    let filter = ProgramFilter {
        min_price,
        max_price,
        ..ProgramFilter::default()
    };
    assert_eq!(names(&filter.apply(programs)), expected);
}

#[rstest]
fn inactive_price_range_keeps_unparseable_prices(programs: Vec<Program>) {
    let filter = ProgramFilter {
        category: Some("Postgraduate".to_owned()),
        ..ProgramFilter::default()
    };
    assert_eq!(
        names(&filter.apply(programs)),
        vec!["MBA", "Engineering MSc", "Medicine MD"]
    );
}

#[rstest]
fn range_prices_filter_by_their_lower_bound() {
    let programs = vec![
        program("Law LLM", "$10,000 - $15,000", "Postgraduate", None),
        program("MBA", "$35,000", "Postgraduate", None),
    ];
    let filter = ProgramFilter {
        max_price: Some(12_000.0),
        ..ProgramFilter::default()
    };
    assert_eq!(names(&filter.apply(programs)), vec!["Law LLM"]);
}
