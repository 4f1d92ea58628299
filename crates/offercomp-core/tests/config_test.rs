use offercomp_core::config::*;
use offercomp_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = OfferCompConfig::from_toml("").unwrap();

    // Calculator defaults
    assert_eq!(config.calculator.vesting_tolerance, 0.01);
    assert_eq!(config.calculator.default_exchange_rate, 83.0);
    assert_eq!(config.calculator.default_employer_pf_percentage, 12.0);
    assert_eq!(config.calculator.default_vesting_years, 4);
    assert_eq!(config.calculator.max_vesting_years, 6);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_output);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[calculator]
default_exchange_rate = 84.5
max_vesting_years = 10

[observability]
log_level = "debug"
"#;
    let config = OfferCompConfig::from_toml(toml).unwrap();
    assert_eq!(config.calculator.default_exchange_rate, 84.5);
    assert_eq!(config.calculator.max_vesting_years, 10);
    // Non-overridden fields keep defaults
    assert_eq!(config.calculator.vesting_tolerance, 0.01);
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.observability.json_output);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = OfferCompConfig::from_toml("[calculator\nvesting_tolerance = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validate_rejects_non_positive_tolerance() {
    let mut config = OfferCompConfig::default();
    config.calculator.vesting_tolerance = 0.0;
    let err = config.validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "calculator.vesting_tolerance")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validate_rejects_zero_exchange_rate() {
    let mut config = OfferCompConfig::default();
    config.calculator.default_exchange_rate = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_zero_max_vesting_years() {
    let mut config = OfferCompConfig::default();
    config.calculator.max_vesting_years = 0;
    assert!(config.validate().is_err());
}

#[test]
fn defaults_pass_validation() {
    assert!(OfferCompConfig::default().validate().is_ok());
}

#[test]
fn config_survives_toml_serialization() {
    let mut config = OfferCompConfig::default();
    config.calculator.default_vesting_years = 3;
    let text = config.to_toml().unwrap();
    let parsed = OfferCompConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn load_reports_missing_file() {
    let err = OfferCompConfig::load(std::path::Path::new("/nonexistent/offercomp.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
