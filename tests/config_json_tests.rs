use std::time::Duration;

use tourism_explorer::ExplorerError;
use tourism_explorer::api::{ExplorerConfig, ExplorerEngine, PlotMargins};
use tourism_explorer::core::Viewport;
use tourism_explorer::render::NullRenderer;

#[test]
fn defaults_match_documented_values() {
    let config = ExplorerConfig::default();
    assert_eq!(config.viewport, Viewport::new(960, 540));
    assert_eq!((config.default_year_min, config.default_year_max), (1995, 2020));
    assert_eq!(config.playback_interval(), Duration::from_millis(600));
    assert_eq!(config.zoom_reset_transition(), Duration::from_millis(750));
    assert_eq!(config.zoom_scale_extent, (0.5, 10.0));
    assert_eq!(config.stats_top_n, 5);
    assert_eq!(config.plot_area().width, 760.0);
}

#[test]
fn partial_json_fills_defaults() {
    let config = ExplorerConfig::from_json_str(
        r#"{ "viewport": { "width": 1200, "height": 700 }, "playback_upper_year": 2019 }"#,
    )
    .expect("parse config");
    assert_eq!(config.viewport, Viewport::new(1200, 700));
    assert_eq!(config.playback_upper_year, Some(2019));
    assert_eq!(config.playback_interval_ms, 600);
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ExplorerConfig::new(Viewport::new(800, 480))
        .with_default_years(2000, 2010)
        .with_playback_upper_year(2012);
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(ExplorerConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        ExplorerConfig::new(Viewport::new(0, 400)).validate(),
        Err(ExplorerError::InvalidViewport { width: 0, .. })
    ));
    let crowded = ExplorerConfig::new(Viewport::new(100, 100)).with_margins(PlotMargins {
        top: 10.0,
        right: 60.0,
        bottom: 10.0,
        left: 60.0,
    });
    assert!(crowded.validate().is_err());
    assert!(ExplorerConfig::from_json_str(r#"{ "playback_interval_ms": 0 }"#).is_err());
    assert!(matches!(
        ExplorerConfig::from_json_str("{ not json"),
        Err(ExplorerError::Json(_))
    ));
}

#[test]
fn engine_without_data_uses_default_years() {
    let engine = ExplorerEngine::new(
        NullRenderer::default(),
        ExplorerConfig::default().with_default_years(2005, 2001),
    )
    .expect("engine");
    assert_eq!(engine.state().year_range(), (2001, 2005));
    assert!(engine.display_series().is_empty());
    assert_eq!(engine.y_domain(), (0.0, 1.05));
}
