//! Content Repository Integration Tests
//!
//! Exercises the production dataset end to end: completeness of every entry,
//! lookup semantics, the JSON wire shape, and known dataset values the
//! dashboard depends on.

use circuitcalc_content::{get_content, repository, ContentRepository, SectionContent};

/// Every calculator with authored content has a complete entry: non-empty
/// steps, glossary items, and guide sections.
#[test]
fn test_every_entry_is_complete() {
    let repo = repository();
    assert!(!repo.is_empty(), "production repository must not be empty");

    for id in repo.ids() {
        let entry = repo.get(id).expect("ids() must only yield present keys");
        assert!(
            !entry.how_to_use.steps.is_empty(),
            "{id}: howToUse.steps must not be empty"
        );
        assert!(
            !entry.metrics.items.is_empty(),
            "{id}: metrics.items must not be empty"
        );
        assert!(
            !entry.guide.sections.is_empty(),
            "{id}: guide.sections must not be empty"
        );
        assert!(!entry.how_to_use.title.is_empty(), "{id}: missing howToUse title");
        assert!(!entry.metrics.title.is_empty(), "{id}: missing metrics title");
        assert!(!entry.guide.title.is_empty(), "{id}: missing guide title");
    }
}

/// Unknown ids return None — a miss is an expected outcome, not an error.
#[test]
fn test_unknown_id_returns_none() {
    assert!(get_content("nonexistent-calculator").is_none());
}

/// The empty string is not silently mapped to any default entry.
#[test]
fn test_empty_id_returns_none() {
    assert!(get_content("").is_none());
}

/// Identifiers are case-sensitive.
#[test]
fn test_id_lookup_is_case_sensitive() {
    assert!(get_content("ohms-law").is_some());
    assert!(get_content("Ohms-Law").is_none());
    assert!(get_content("OHMS-LAW").is_none());
}

/// Repeated lookups return value-equal results — the repository is immutable.
#[test]
fn test_lookup_is_idempotent() {
    let first = get_content("ohms-law").expect("ohms-law must be present");
    let second = get_content("ohms-law").expect("ohms-law must be present");
    assert_eq!(first, second);
}

/// Every guide section serializes as either a JSON string or a JSON array of
/// strings — the `string | string[]` contract the renderer branches on.
#[test]
fn test_section_content_wire_shape() {
    for id in repository().ids() {
        let entry = get_content(id).expect("ids() must only yield present keys");
        for section in &entry.guide.sections {
            let json = serde_json::to_value(&section.content).expect("section must serialize");
            match json {
                serde_json::Value::String(s) => {
                    assert!(!s.is_empty(), "{id}/{}: empty paragraph", section.title);
                }
                serde_json::Value::Array(items) => {
                    assert!(!items.is_empty(), "{id}/{}: empty bullet list", section.title);
                    assert!(
                        items.iter().all(serde_json::Value::is_string),
                        "{id}/{}: bullet list must contain only strings",
                        section.title
                    );
                }
                other => panic!(
                    "{id}/{}: section content must be string or string[], got {other:?}",
                    section.title
                ),
            }
        }
    }
}

/// The ohms-law glossary defines "Voltage (V)" in terms of volts.
#[test]
fn test_ohms_law_glossary_values() {
    let entry = get_content("ohms-law").expect("ohms-law must be present");
    let voltage = entry
        .metrics
        .items
        .iter()
        .find(|item| item.term == "Voltage (V)")
        .expect("ohms-law glossary must define Voltage (V)");
    assert!(
        voltage.definition.contains("volts"),
        "Voltage definition should mention volts: {}",
        voltage.definition
    );
}

/// The resistor color code guide renders its band-reading section as a
/// bulleted list, exercising the polymorphic content shape.
#[test]
fn test_resistor_color_code_band_section_is_bulleted() {
    let entry = get_content("resistor-color-code").expect("resistor-color-code must be present");
    let bands = entry
        .guide
        .sections
        .iter()
        .find(|s| s.title == "How to Read Color Bands")
        .expect("guide must include the band-reading section");
    assert!(
        bands.content.is_bullets(),
        "band-reading steps are enumerable facts and must be a bulleted list"
    );

    // Both shapes should appear in the same guide
    assert!(
        entry.guide.sections.iter().any(|s| s.content.is_paragraph()),
        "guide should also contain narrative prose sections"
    );
}

/// Entries serialize with the camelCase keys the frontend expects.
#[test]
fn test_entry_json_contract() {
    let entry = get_content("voltage-divider").expect("voltage-divider must be present");
    let json = serde_json::to_value(entry).expect("entry must serialize");

    assert!(json.get("howToUse").is_some());
    assert!(json.get("metrics").is_some());
    assert!(json.get("guide").is_some());
    assert!(
        json["metrics"]["items"][0].get("term").is_some(),
        "glossary items expose term/definition pairs"
    );
}

/// A fixture repository built through the public factory behaves like the
/// production one, without touching the production dataset.
#[test]
fn test_fixture_repository_is_independent() {
    let fixture = ContentRepository::new(Vec::new());
    assert!(fixture.is_empty());
    assert!(fixture.get("ohms-law").is_none());

    // Production repository is unaffected
    assert!(get_content("ohms-law").is_some());
}

/// Known dataset ids resolve; the suite the dashboard ships with is present.
#[test]
fn test_shipped_calculators_have_content() {
    for id in [
        "ohms-law",
        "resistor-color-code",
        "voltage-divider",
        "led-resistor",
        "capacitor-code",
        "series-parallel",
        "wire-gauge",
        "battery-life",
    ] {
        assert!(get_content(id).is_some(), "missing content for {id}");
    }
    assert_eq!(repository().len(), 8);
}

/// Every entry's guide exercises the paragraph shape somewhere — narrative
/// material must not be flattened into bullets.
#[test]
fn test_guides_contain_prose() {
    for id in repository().ids() {
        let entry = get_content(id).expect("ids() must only yield present keys");
        assert!(
            entry.guide.sections.iter().any(|s| matches!(
                s.content,
                SectionContent::Paragraph(_)
            )),
            "{id}: guide should contain at least one prose section"
        );
    }
}
