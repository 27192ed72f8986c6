use super::*;

#[test]
fn defaults_describe_the_demo() {
    let cfg = ChartConfig::default();
    assert_eq!((cfg.series, cfg.points), (4, 58));
    assert_eq!(cfg.timing.stagger_step(), Millis(10));
    assert_eq!(cfg.timing.phase_duration(), Millis(500));
    assert_eq!(cfg.timing.enter_duration(), Millis(250));
    assert_eq!(cfg.timing.idle_toggle(), Millis(2000));
    let plot = cfg.plot_size().unwrap();
    assert_eq!((plot.width, plot.height), (580.0, 240.0));
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = ChartConfig::from_json_str(
        r#"{ "series": 2, "timing": { "idle_toggle_ms": 50, "ease": "linear" } }"#,
    )
    .unwrap();
    assert_eq!(cfg.series, 2);
    assert_eq!(cfg.points, 58);
    assert_eq!(cfg.timing.idle_toggle_ms, 50);
    assert_eq!(cfg.timing.phase_duration_ms, 500);
    assert_eq!(cfg.timing.ease, Ease::Linear);
}

#[test]
fn invalid_configs_are_rejected() {
    for json in [
        r#"{ "series": 0 }"#,
        r#"{ "points": 0 }"#,
        r#"{ "band_padding": 1.5 }"#,
        r#"{ "width": 10 }"#,
    ] {
        let err = ChartConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, BarmorphError::Configuration(_)), "{json}: {err}");
    }
    let err = ChartConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, BarmorphError::Serde(_)));
}

#[test]
fn reader_and_str_agree() {
    let json = r#"{ "seed": 9, "width": 800 }"#;
    let a = ChartConfig::from_json_str(json).unwrap();
    let b = ChartConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(a, b);
}
