// Host-side tests for the country dataset and record validation.

use globe_core::{
    build_markers, bundled_countries, parse_countries, CountryName, CountryRecord, Error,
    NumberFormat, SceneParams,
};
use rand::{rngs::StdRng, SeedableRng};

const MIXED: &str = r#"[
  {"name": {"common": "Peru"}, "population": 32971846, "latlng": [-10.0, -76.0],
   "flags": ["https://flagcdn.com/pe.svg", "https://flagcdn.com/w320/pe.png"]},
  {"name": {"common": "Nowhere"}, "population": 10, "latlng": [12.0]},
  {"name": {"common": "   "}, "population": 10, "latlng": [1.0, 2.0]},
  {"population": 10, "latlng": [1.0, 2.0]},
  {"name": {"common": "Tuvalu"}, "latlng": [-8.0, 178.0], "extra": true}
]"#;

#[test]
fn records_parse_field_by_field() {
    let records = parse_countries(MIXED).expect("valid json");
    assert_eq!(records.len(), 5);

    let peru = records[0].validate(0).expect("peru is valid");
    assert_eq!(peru.name, "Peru");
    assert_eq!(peru.population, 32_971_846);
    assert_eq!((peru.lat, peru.lng), (-10.0, -76.0));
    assert_eq!(peru.flag_url, Some("https://flagcdn.com/pe.svg"));

    // Missing population defaults to zero, unknown keys are ignored.
    let tuvalu = records[4].validate(4).expect("tuvalu is valid");
    assert_eq!(tuvalu.population, 0);
    assert_eq!(tuvalu.flag_url, None);
}

#[test]
fn malformed_records_are_rejected_individually() {
    let records = parse_countries(MIXED).expect("valid json");
    assert!(matches!(
        records[1].validate(1),
        Err(Error::MissingCoordinates { ref name }) if name == "Nowhere"
    ));
    assert!(matches!(records[2].validate(2), Err(Error::MissingName { index: 2 })));
    assert!(matches!(records[3].validate(3), Err(Error::MissingName { index: 3 })));
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let record = CountryRecord {
        name: Some(CountryName {
            common: "Atlantis".to_string(),
        }),
        population: 1,
        latlng: vec![Some(f64::NAN), Some(0.0)],
        flags: vec![],
    };
    assert!(matches!(
        record.validate(0),
        Err(Error::NonFiniteCoordinates { .. })
    ));
}

const NULLS: &str = r#"[
  {"name": {"common": "Fiji"}, "population": 896444, "latlng": [-17.7134, 178.065],
   "flags": [null, "https://flagcdn.com/w320/fj.png"]},
  {"name": {"common": "Ghost"}, "population": null, "latlng": null, "flags": null},
  {"name": {"common": "Half"}, "population": 5, "latlng": [null, 2.0]},
  {"name": {"common": null}, "population": 5, "latlng": [1.0, 2.0]},
  {"name": null, "population": 5, "latlng": [1.0, 2.0]}
]"#;

#[test]
fn null_fields_reject_only_their_record() {
    let records = parse_countries(NULLS).expect("nulls do not fail the whole list");
    assert_eq!(records.len(), 5);

    let fiji = records[0].validate(0).expect("fiji is valid");
    assert_eq!(fiji.population, 896_444);
    assert_eq!(fiji.flag_url, Some("https://flagcdn.com/w320/fj.png"));

    assert_eq!(records[1].population, 0);
    assert!(matches!(
        records[1].validate(1),
        Err(Error::MissingCoordinates { ref name }) if name == "Ghost"
    ));
    assert!(matches!(
        records[2].validate(2),
        Err(Error::MissingCoordinates { ref name }) if name == "Half"
    ));
    assert!(matches!(records[3].validate(3), Err(Error::MissingName { index: 3 })));
    assert!(matches!(records[4].validate(4), Err(Error::MissingName { index: 4 })));

    let mut rng = StdRng::seed_from_u64(3);
    let markers = build_markers(
        &records,
        &SceneParams::default(),
        &NumberFormat::EN_US,
        &mut rng,
    );
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].country, "Fiji");
    assert_eq!(
        markers[0].flag_url.as_deref(),
        Some("https://flagcdn.com/w320/fj.png")
    );
}

#[test]
fn invalid_json_is_an_error() {
    assert!(matches!(parse_countries("{not json"), Err(Error::Json(_))));
    assert!(matches!(parse_countries(r#"{"a": 1}"#), Err(Error::Json(_))));
}

#[test]
fn bundled_dataset_is_fully_valid() {
    let records = bundled_countries().expect("bundled data parses");
    assert!(records.len() >= 245, "only {} records", records.len());
    let mut uninhabited = 0;
    for (i, r) in records.iter().enumerate() {
        let c = r.validate(i).unwrap_or_else(|e| panic!("record {}: {}", i, e));
        assert!((-90.0..=90.0).contains(&c.lat), "{} lat {}", c.name, c.lat);
        assert!((-180.0..=180.0).contains(&c.lng), "{} lng {}", c.name, c.lng);
        assert!(c.flag_url.is_some(), "{} has no flag", c.name);
        if c.population == 0 {
            uninhabited += 1;
        }
    }
    // Bouvet Island and Heard Island report zero.
    assert_eq!(uninhabited, 2);
}
