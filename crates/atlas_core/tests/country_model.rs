use atlas_core::{Country, CountryRecord, CountryValidationError};

#[test]
fn new_sets_all_fields() {
    let country = Country::new("India", "Asia", 1_438_054_073);

    assert_eq!(country.name, "India");
    assert_eq!(country.continent, "Asia");
    assert_eq!(country.population, 1_438_054_073);
}

#[test]
fn validate_rejects_empty_and_whitespace_name() {
    let empty = Country::new("", "Asia", 1);
    assert_eq!(
        empty.validate().unwrap_err(),
        CountryValidationError::EmptyName
    );

    let blank = Country::new("  \t", "Asia", 1);
    assert_eq!(
        blank.validate().unwrap_err(),
        CountryValidationError::EmptyName
    );
}

#[test]
fn validate_leaves_population_unconstrained() {
    // No range policy exists at this layer; negative values pass through.
    let country = Country::new("Atlantis", "Ocean", -1);
    assert!(country.validate().is_ok());
}

#[test]
fn serde_uses_persisted_column_names() {
    let country = Country::new("Nepal", "Asia", 31_143_833);

    let value = serde_json::to_value(&country).unwrap();
    assert_eq!(value["Name"], "Nepal");
    assert_eq!(value["Continent"], "Asia");
    assert_eq!(value["Population"], 31_143_833);

    let parsed: Country = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, country);
}

#[test]
fn record_to_country_drops_the_key() {
    let record = CountryRecord {
        id: 7,
        name: "India".to_string(),
        continent: "Asia".to_string(),
        population: 1_438_054_073,
    };

    assert_eq!(
        record.to_country(),
        Country::new("India", "Asia", 1_438_054_073)
    );
}
