use sentiment_report::core::Viewport;
use sentiment_report::{ReportConfig, ReportEngine, ReportError};

#[test]
fn defaults_match_letter_page_and_chart_space() {
    let config = ReportConfig::default();
    assert_eq!(config.chart_viewport, Viewport::new(320, 110));
    assert_eq!(config.wrap_width, 92);
    assert_eq!(config.max_text_lines, 20);
    assert_eq!(config.max_headlines, 6);
    assert_eq!((config.page_width, config.page_height), (612.0, 792.0));
    assert_eq!(config.font_name, "Helvetica");
    config.validate().expect("defaults are valid");
}

#[test]
fn partial_json_fills_in_defaults() {
    let config = ReportConfig::from_json_str(r#"{ "wrap_width": 60, "font_name": "Courier" }"#)
        .expect("config");
    assert_eq!(config.wrap_width, 60);
    assert_eq!(config.font_name, "Courier");
    assert_eq!(config.max_text_lines, 20);
}

#[test]
fn config_round_trips_through_json() {
    let config = ReportConfig::default()
        .with_page_size(595.0, 842.0)
        .with_max_headlines(3);
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(ReportConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn zero_viewport_is_rejected() {
    let err = ReportConfig::default()
        .with_chart_viewport(Viewport::new(0, 110))
        .validate()
        .expect_err("must fail");
    assert!(matches!(
        err,
        ReportError::InvalidViewport {
            width: 0,
            height: 110
        }
    ));
}

#[test]
fn invalid_values_are_config_errors() {
    let cases = [
        ReportConfig::default().with_wrap_width(0),
        ReportConfig::default().with_page_size(0.0, 792.0),
        ReportConfig::default().with_page_size(612.0, f64::NAN),
        ReportConfig::default().with_font_name(""),
        ReportConfig::default().with_font_name("Times Roman"),
        ReportConfig::default().with_font_name("Bad/Name"),
    ];
    for config in cases {
        let err = config.validate().expect_err("must fail");
        assert!(matches!(err, ReportError::InvalidConfig(_)), "{err}");
    }
}

#[test]
fn engine_refuses_invalid_config() {
    assert!(ReportEngine::new(ReportConfig::default().with_wrap_width(0)).is_err());
    assert!(ReportEngine::new(ReportConfig::default()).is_ok());
}

#[test]
fn malformed_config_json_is_invalid_data() {
    let err = ReportConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ReportError::InvalidData(_)));
}

#[test]
fn default_engine_uses_default_config() {
    let engine = ReportEngine::default();
    assert_eq!(engine.config(), &ReportConfig::default());
    assert_eq!(
        ReportEngine::new(ReportConfig::default()).expect("valid config"),
        engine
    );
}
