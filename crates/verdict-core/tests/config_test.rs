use verdict_core::config::ValidationConfig;
use verdict_core::errors::ConfigError;
use verdict_core::{Capabilities, ValidationState, VerdictConfig};

#[test]
fn defaults_enable_every_capability() {
    let config = VerdictConfig::default();
    assert!(config.validation.capabilities().is_everything());
    assert!(!config.validation.state().is_live_input());
    assert_eq!(config.validation.max_depth, None);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = VerdictConfig::from_toml(
        r#"
        [validation]
        warnings = false
        live_input = true
        max_depth = 8
        "#,
    )
    .unwrap();
    let caps = config.validation.capabilities();
    assert!(!caps.contains(Capabilities::WARNINGS));
    assert!(caps.contains(Capabilities::MODIFICATION | Capabilities::VALIDATE_WITHOUT_OBJECT));
    assert!(config.validation.state().contains(ValidationState::LIVE_INPUT));
    assert_eq!(config.validation.max_depth, Some(8));
    assert!(!config.observability.json);
}

#[test]
fn empty_toml_is_the_default() {
    let config = VerdictConfig::from_toml("").unwrap();
    assert!(config.validation.capabilities().is_everything());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = VerdictConfig::from_toml("[validation\nwarnings = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_depth_is_rejected() {
    let err = VerdictConfig::from_toml("[validation]\nmax_depth = 0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "validation.max_depth"));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = VerdictConfig::from_toml("[observability]\nlog_level = \"loud\"").unwrap_err();
    assert!(err.to_string().contains("observability.log_level"));
}

#[test]
fn flags_round_trip_through_config() {
    let caps = Capabilities::WARNINGS | Capabilities::VALIDATE_WITHOUT_OBJECT;
    let config = ValidationConfig::from_flags(caps, ValidationState::LIVE_INPUT);
    assert_eq!(config.capabilities(), caps);
    assert_eq!(config.state(), ValidationState::LIVE_INPUT);
}

#[test]
fn version_matches_the_package() {
    assert_eq!(verdict_core::constants::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!verdict_core::constants::VERSION.is_empty());
}
