//! Integration tests for CFID generation.
//!
//! Covers the end-to-end pipeline: formatting, composition, random suffix,
//! and output rendering.

mod common;

use cfid::{IdConfig, Precision, make_cfid, make_cfid_with, output};
use common::{base_config, config_with_precision, config_with_suffix, reference_time};
use rand::SeedableRng;
use rand::rngs::StdRng;

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_full_precision_with_context_no_suffix() {
    let id = make_cfid(reference_time(), "myfile.txt", &base_config()).unwrap();
    assert_eq!(id, "⭐️20241122T101530-myfile.txt❤️");
}

#[test]
fn test_empty_context_yields_bare_timestamp() {
    let id = make_cfid(reference_time(), "", &base_config()).unwrap();
    assert_eq!(id, "⭐️20241122T101530❤️");
    assert!(!id.contains('-'));
}

#[test]
fn test_timestamp_pattern_per_precision() {
    let cases = [
        (Precision::Year, "⭐️2024❤️"),
        (Precision::Month, "⭐️202411❤️"),
        (Precision::Day, "⭐️20241122❤️"),
        (Precision::Hour, "⭐️20241122T10❤️"),
        (Precision::Minute, "⭐️20241122T1015❤️"),
        (Precision::Second, "⭐️20241122T101530❤️"),
    ];
    for (precision, expected) in cases {
        let id = make_cfid(reference_time(), "", &config_with_precision(precision)).unwrap();
        assert_eq!(id, expected);
    }
}

// =============================================================================
// Random Suffix
// =============================================================================

#[test]
fn test_suffix_characters_come_from_charset() {
    let config = IdConfig {
        random_length: 12,
        charset: "xyz".chars().collect(),
        ..Default::default()
    };
    let id = make_cfid(reference_time(), "", &config).unwrap();

    let suffix = id
        .strip_prefix("⭐️20241122T101530-")
        .and_then(|rest| rest.strip_suffix("❤️"))
        .unwrap();
    assert_eq!(suffix.chars().count(), 12);
    assert!(suffix.chars().all(|c| "xyz".contains(c)));
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let config = config_with_suffix(10);
    let a = make_cfid_with(&mut StdRng::seed_from_u64(99), reference_time(), "f.txt", &config);
    let b = make_cfid_with(&mut StdRng::seed_from_u64(99), reference_time(), "f.txt", &config);
    assert_eq!(a.unwrap(), b.unwrap());
}

#[test]
fn test_different_seeds_give_different_suffixes() {
    let config = config_with_suffix(16);
    let a = make_cfid_with(&mut StdRng::seed_from_u64(1), reference_time(), "f.txt", &config);
    let b = make_cfid_with(&mut StdRng::seed_from_u64(2), reference_time(), "f.txt", &config);
    assert_ne!(a.unwrap(), b.unwrap());
}

#[test]
fn test_zero_suffix_length_omits_segment() {
    let id = make_cfid(reference_time(), "", &config_with_suffix(0)).unwrap();
    assert_eq!(id, "⭐️20241122T101530❤️");
}

// =============================================================================
// Output Rendering
// =============================================================================

#[test]
fn test_plain_output_format() {
    let id = make_cfid(reference_time(), "myfile.txt", &base_config()).unwrap();
    assert_eq!(
        output::render_plain(&id),
        "Generated ID: ⭐️20241122T101530-myfile.txt❤️"
    );
}

#[test]
fn test_json_output_is_single_key_object() {
    let id = make_cfid(reference_time(), "myfile.txt", &base_config()).unwrap();
    let rendered = output::render_json(&id).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["aha.id"], "⭐️20241122T101530-myfile.txt❤️");
    assert_eq!(parsed.as_object().unwrap().len(), 1);
}
