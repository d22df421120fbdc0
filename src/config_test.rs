use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_hand_authored_page() {
    let config = PortfolioConfig::default();
    assert_eq!(config.nav.breakpoint_px, 768.0);
    assert_eq!(config.nav.header_offset_px, 100.0);
    assert_eq!(config.notification.lifetime_ms, 5_000);
    assert_eq!(config.notification.fade_ms, 300);
    assert_eq!(config.typing.texts.len(), 4);
    assert_eq!(config.typing.type_ms, 100);
    assert_eq!(config.typing.hold_full_ms, 2_000);
    assert_eq!(config.typing.delete_ms, 50);
    assert_eq!(config.typing.hold_empty_ms, 500);
    assert_eq!(config.parallax.speed, 0.5);
    assert_eq!(config.resources.preload_images.len(), 3);
}

#[test]
fn skills_and_reveal_use_distinct_observer_options() {
    let config = PortfolioConfig::default();
    let skills = config.skills.observer_options();
    let reveal = config.reveal.observer_options();
    assert_eq!(skills.threshold, 0.5);
    assert_eq!(skills.root_margin, "0px 0px -100px 0px");
    assert_eq!(reveal.threshold, 0.1);
    assert_eq!(reveal.root_margin, "0px 0px -50px 0px");
    assert_eq!(config.skills.restore_delay_ms, 200);
}

#[test]
fn defaults_pass_validation() {
    assert!(PortfolioConfig::default().validate().is_ok());
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = PortfolioConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, PortfolioConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PortfolioConfig::from_json(r#"{"typing": {"texts": ["A", "B"]}, "nav": {"breakpoint_px": 1024}}"#)
        .expect("override should parse");
    assert_eq!(config.typing.texts, vec!["A".to_owned(), "B".to_owned()]);
    assert_eq!(config.typing.type_ms, 100);
    assert_eq!(config.nav.breakpoint_px, 1024.0);
    assert_eq!(config.nav.header_offset_px, 100.0);
    assert_eq!(config.skills, SkillsConfig::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let config = PortfolioConfig::from_json(r#"{"theme": "dark"}"#).expect("unknown key should be ignored");
    assert_eq!(config, PortfolioConfig::default());
}

#[test]
fn malformed_json_is_parse_error() {
    let err = PortfolioConfig::from_json("{not json").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("config parse failed"));
}

#[test]
fn empty_typing_list_is_rejected() {
    let err = PortfolioConfig::from_json(r#"{"typing": {"texts": []}}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "typing.texts", .. }));
}

#[test]
fn empty_typing_entry_is_rejected() {
    let err = PortfolioConfig::from_json(r#"{"typing": {"texts": ["ok", ""]}}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "typing.texts", .. }));
}

#[test]
fn zero_tick_duration_is_rejected() {
    let err = PortfolioConfig::from_json(r#"{"typing": {"delete_ms": 0}}"#).expect_err("should fail");
    assert_eq!(err.to_string(), "invalid config value `typing`: tick durations must be positive");
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let err = PortfolioConfig::from_json(r#"{"reveal": {"threshold": 1.5}}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "reveal.threshold", .. }));
}

#[test]
fn non_positive_breakpoint_is_rejected() {
    let err = PortfolioConfig::from_json(r#"{"nav": {"breakpoint_px": 0}}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "nav.breakpoint_px", .. }));
}
