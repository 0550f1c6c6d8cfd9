//! Map query builder tests

use convoy_dashboard::location::canonical_location;
use convoy_dashboard::map::{build_map_query, MapEmbedSettings, MapQueryBuilder};
use url::Url;

const SAMPLE_LOCATIONS: &[&str] = &[
    "",
    "Base ()",
    "Fort Base (34.05,-118.25)",
    "Checkpoint Alpha",
    "Base (34.0",
    "a&b=c#d?e/f",
    "100% (sure)",
    "Zürich (47.37,8.54)",
    "   ",
    "(x+y)",
];

#[test]
fn test_url_always_parses() {
    for start in SAMPLE_LOCATIONS {
        for end in SAMPLE_LOCATIONS {
            let src = build_map_query(start, end);
            let url = Url::parse(&src).unwrap_or_else(|e| panic!("{src}: {e}"));
            assert_eq!(url.host_str(), Some("maps.google.com"));
            assert_eq!(url.path(), "/maps");
        }
    }
}

#[test]
fn test_fixed_parameters() {
    let src = build_map_query("X", "Y");
    let url = Url::parse(&src).unwrap();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let expected = [
        ("q", "X to Y"),
        ("t", ""),
        ("z", "10"),
        ("ie", "UTF8"),
        ("iwloc", ""),
        ("output", "embed"),
    ];
    assert_eq!(pairs.len(), expected.len());
    for ((key, value), (want_key, want_value)) in pairs.iter().zip(expected) {
        assert_eq!(key, want_key);
        assert_eq!(value, want_value);
    }
}

#[test]
fn test_query_round_trips_canonical_locations() {
    // Form decoding turns the literal `+to+` into " to "
    for start in ["Fort Base (34.05,-118.25)", "a&b=c#d", "x+y z"] {
        let src = build_map_query(start, "Depot (35.1,-119.3)");
        let url = Url::parse(&src).unwrap();
        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(
            q,
            format!("{} to 35.1,-119.3", canonical_location(start))
        );
    }
}

#[test]
fn test_plus_in_location_is_escaped() {
    let src = build_map_query("(x+y)", "Z");
    assert!(src.contains("q=x%2By+to+Z&"));
}

#[test]
fn test_builder_uses_settings() {
    let builder = MapQueryBuilder::new(MapEmbedSettings {
        host: "maps.example.org".to_string(),
    });
    let url = Url::parse(&builder.build("A (1,2)", "B (3,4)")).unwrap();
    assert_eq!(url.host_str(), Some("maps.example.org"));
    assert!(url.query_pairs().any(|(k, v)| k == "z" && v == "10"));
}
