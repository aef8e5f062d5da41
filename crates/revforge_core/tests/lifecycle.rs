//! Full engine lifecycle over a small fixed corpus: timeline generation,
//! baseline build, revision injection, container round-trip, sanitization.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use revforge_core::package::{
    Package, CORE_PROPS_PART, DOCUMENT_PART, SETTINGS_PART,
};
use revforge_core::{builder, injector, sanitizer, timeline};
use revforge_core::{DocumentProperties, RevisionMode, SanitizeOptions};

fn corpus() -> Vec<String> {
    vec!["Alpha.".to_string(), "Beta.".to_string(), "Gamma.".to_string()]
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
}

fn part_str(pkg: &Package, name: &str) -> String {
    String::from_utf8(pkg.part(name).unwrap().to_vec()).unwrap()
}

#[test]
fn three_sentence_timeline_is_exact_with_fixed_interval() {
    let mut rng = StdRng::seed_from_u64(0);
    let records = timeline::generate(&corpus(), start(), 60, 60, "Writer", &mut rng).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].created_at,
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    );
    assert_eq!(
        records[1].created_at,
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 1, 0).unwrap()
    );
    assert_eq!(
        records[2].created_at,
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 2, 0).unwrap()
    );
    assert_eq!(
        records.iter().map(|r| r.revision_id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn injected_package_carries_exact_ids_and_dates() {
    let mut rng = StdRng::seed_from_u64(0);
    let records = timeline::generate(&corpus(), start(), 60, 60, "Writer", &mut rng).unwrap();
    let baseline = builder::build(&records, &DocumentProperties::default(), "Writer").unwrap();
    let injected = injector::inject(&baseline, &records, RevisionMode::Suggestions).unwrap();

    let body = part_str(&injected, DOCUMENT_PART);
    assert_eq!(body.matches("<w:ins ").count(), 3);
    for (id, date) in [
        (1, "2024-01-01T10:00:00Z"),
        (2, "2024-01-01T10:01:00Z"),
        (3, "2024-01-01T10:02:00Z"),
    ] {
        assert!(body.contains(&format!(r#"w:id="{}""#, id)));
        assert!(body.contains(&format!(r#"w:date="{}""#, date)));
    }
    assert!(part_str(&injected, SETTINGS_PART).contains("<w:trackRevisions/>"));
}

#[test]
fn sanitizing_injected_output_yields_neutral_plain_document() {
    let mut rng = StdRng::seed_from_u64(0);
    let records = timeline::generate(&corpus(), start(), 60, 60, "Writer", &mut rng).unwrap();
    let baseline = builder::build(&records, &DocumentProperties::default(), "Writer").unwrap();
    let injected = injector::inject(&baseline, &records, RevisionMode::Suggestions).unwrap();

    // Round-trip through the container first, as a consumer would.
    let reopened = Package::from_bytes(&injected.to_bytes().unwrap()).unwrap();

    let neutral = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    let clean = sanitizer::sanitize(&reopened, neutral, &SanitizeOptions::default()).unwrap();

    let body = part_str(&clean, DOCUMENT_PART);
    assert_eq!(body.matches("<w:p>").count(), 3);
    assert!(!body.contains("<w:ins"));
    for text in ["Alpha.", "Beta.", "Gamma."] {
        assert!(body.contains(text));
    }
    assert!(!body.contains("Writer"));

    let core = part_str(&clean, CORE_PROPS_PART);
    assert_eq!(core.matches("2000-01-01T00:00:00Z").count(), 2);
    assert!(!core.contains("2024-01-01"));
    assert!(core.contains("Anonymous"));

    assert!(!part_str(&clean, SETTINGS_PART).contains("trackRevisions"));
}

#[test]
fn container_roundtrip_preserves_content() {
    let mut rng = StdRng::seed_from_u64(0);
    let records = timeline::generate(&corpus(), start(), 60, 60, "Writer", &mut rng).unwrap();
    let baseline = builder::build(&records, &DocumentProperties::default(), "Writer").unwrap();

    let bytes = baseline.to_bytes().unwrap();
    let unpacked = Package::from_bytes(&bytes).unwrap();
    let repacked = unpacked.to_bytes().unwrap();
    assert_eq!(Package::from_bytes(&repacked).unwrap(), unpacked);
    assert_eq!(bytes, repacked);
}

#[test]
fn clean_mode_matches_builder_semantics() {
    let mut rng = StdRng::seed_from_u64(0);
    let records = timeline::generate(&corpus(), start(), 60, 60, "Writer", &mut rng).unwrap();
    let baseline = builder::build(&records, &DocumentProperties::default(), "Writer").unwrap();
    let clean = injector::inject(&baseline, &records, RevisionMode::Clean).unwrap();

    let body = part_str(&clean, DOCUMENT_PART);
    assert_eq!(body.matches("<w:ins").count(), 0);
    assert_eq!(body.matches("<w:p>").count(), 3);
    // Document-level properties persist even in clean mode.
    assert!(part_str(&clean, CORE_PROPS_PART).contains("2024-01-01T10:00:00Z"));
}
