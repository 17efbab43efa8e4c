//! Tests for destination construction and patching.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn canada() -> Destination {
    Destination::from_fields(
        RecordId::new("d1").expect("id"),
        DestinationFields {
            country: Some("Canada".to_owned()),
            study_level: Some("Undergraduate".to_owned()),
            documents_required: Some(vec!["Passport".to_owned()]),
            ..DestinationFields::default()
        },
    )
    .expect("valid destination")
}

#[rstest]
#[case(None, Some("Undergraduate"))]
#[case(Some("Canada"), None)]
#[case(Some("  "), Some("Undergraduate"))]
#[case(Some("Canada"), Some(""))]
fn creation_requires_country_and_level(
    #[case] country: Option<&str>,
    #[case] level: Option<&str>,
) {
    let fields = DestinationFields {
        country: country.map(str::to_owned),
        study_level: level.map(str::to_owned),
        ..DestinationFields::default()
    };
    let result = Destination::from_fields(RecordId::random(), fields);
    assert_eq!(result, Err(DestinationValidationError::MissingRequired));
}

#[rstest]
fn creation_rejects_unknown_level() {
    let fields = DestinationFields {
        country: Some("Canada".to_owned()),
        study_level: Some("Doctorate".to_owned()),
        ..DestinationFields::default()
    };
    let result = Destination::from_fields(RecordId::random(), fields);
    assert!(matches!(
        result,
        Err(DestinationValidationError::InvalidStudyLevel { .. })
    ));
}

#[rstest]
fn creation_applies_defaults(canada: Destination) {
    assert_eq!(canada.why_this_destination, Narrative::default());
    assert!(canada.visa_requirements.is_empty());
    assert_eq!(canada.image_url, PLACEHOLDER_IMAGE);
}

#[rstest]
fn patch_overwrites_only_supplied_fields(mut canada: Destination) {
    let patch: DestinationFields = serde_json::from_value(json!({
        "id": "other",
        "studyLevel": "Postgraduate",
        "visaRequirements": ["Study permit"]
    }))
    .expect("patch");

    canada.apply_fields(patch).expect("valid patch");

    assert_eq!(canada.id.as_ref(), "d1");
    assert_eq!(canada.country, "Canada");
    assert_eq!(canada.study_level, StudyLevel::Postgraduate);
    assert_eq!(canada.documents_required, vec!["Passport".to_owned()]);
    assert_eq!(canada.visa_requirements, vec!["Study permit".to_owned()]);
}

#[rstest]
fn patch_with_blank_country_is_rejected_without_changes(mut canada: Destination) {
    let before = canada.clone();
    let patch = DestinationFields {
        country: Some(String::new()),
        study_level: Some("Postgraduate".to_owned()),
        ..DestinationFields::default()
    };
    assert_eq!(
        canada.apply_fields(patch),
        Err(DestinationValidationError::BlankCountry)
    );
    assert_eq!(canada, before);
}

#[rstest]
fn serialises_camel_case(canada: Destination) {
    let value = serde_json::to_value(&canada).expect("json");
    assert_eq!(value["studyLevel"], json!("Undergraduate"));
    assert_eq!(value["imageUrl"], json!(PLACEHOLDER_IMAGE));
    assert_eq!(value["documentsRequired"], json!(["Passport"]));
    assert_eq!(value["whyThisDestination"], json!(""));
}

#[rstest]
fn reads_sparse_stored_records() {
    let stored = json!({ "id": "d9", "country": "UK", "studyLevel": "Postgraduate" });
    let destination: Destination = serde_json::from_value(stored).expect("sparse record");
    assert_eq!(destination.image_url, PLACEHOLDER_IMAGE);
    assert!(destination.international_exam_requirements.is_empty());
}
