use std::time::Duration;

use tourism_explorer::api::{ExplorerConfig, ExplorerEngine, PlaybackState};
use tourism_explorer::core::{ArrivalRecord, Measure, Selection};
use tourism_explorer::interaction::{ZoomMode, ZoomTransform};
use tourism_explorer::render::NullRenderer;

fn records() -> Vec<ArrivalRecord> {
    let mut records = Vec::new();
    for year in 1995..=2020 {
        let t = f64::from(year - 1995);
        records.push(ArrivalRecord::new("France", "FRA", "Europe", year, 60.0 + t));
        records.push(ArrivalRecord::new("Kenya", "KEN", "Africa", year, 0.8 + t * 0.05));
        records.push(ArrivalRecord::new("World", "WLD", "Aggregates", year, 600.0 + t * 20.0));
    }
    records
}

#[test]
fn engine_smoke_flow() {
    let mut engine =
        ExplorerEngine::new(NullRenderer::default(), ExplorerConfig::default()).expect("engine init");
    engine.load_records(records());

    assert_eq!(engine.regions(), ["Africa", "Europe"]);
    assert_eq!(engine.state().year_range(), (1995, 2020));
    assert_eq!(engine.display_series().len(), 3);

    engine.set_region(Selection::only("Europe"));
    engine.set_measure(Measure::PeakNormalized);
    engine.set_year_range(2010, 2000);
    assert_eq!(engine.state().year_range(), (2000, 2010));
    let france = engine.display_series_by_key("France").expect("france");
    assert_eq!(france.values.last().map(|value| value.arrivals), Some(100.0));
    let (y_min, y_max) = engine.y_domain();
    assert_eq!(y_min, 0.0);
    assert!((y_max - 105.0).abs() <= 1e-9);

    engine.zoom_begin();
    assert_eq!(engine.zoom_mode(), ZoomMode::Zooming);
    engine
        .zoom_update(ZoomTransform::new(2.0, -380.0))
        .expect("zoom update");
    engine.zoom_end();
    assert_eq!(engine.zoom_mode(), ZoomMode::Idle);
    let (start, end) = engine.x_domain();
    assert!((start - 2002.5).abs() <= 1e-9);
    assert!((end - 2007.5).abs() <= 1e-9);

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_series_count, 1);
}

#[test]
fn reset_restores_filters_range_focus_and_zoom() {
    let mut engine =
        ExplorerEngine::new(NullRenderer::default(), ExplorerConfig::default()).expect("engine init");
    engine.load_records(records());
    engine.set_country(Selection::only("Kenya"));
    engine.set_measure(Measure::Growth);
    engine.set_year_range(2005, 2010);
    engine.toggle_focus("Kenya");
    engine.wheel_zoom(-300.0, 100.0).expect("wheel zoom");
    engine.toggle_playback();

    engine.reset();
    assert_eq!(engine.playback_state(), PlaybackState::Stopped);
    assert!(engine.state().region.is_all());
    assert!(engine.state().country.is_all());
    assert_eq!(engine.state().year_range(), (1995, 2020));
    assert_eq!(engine.focused(), None);
    assert_eq!(engine.measure(), Measure::Growth);
    assert_eq!(engine.axis_label(), "Year-over-Year Growth (%)");

    engine.advance(Duration::from_millis(750));
    assert!(engine.zoom_transform().is_identity());
    assert_eq!(engine.x_domain(), (1995.0, 2020.0));
}

#[test]
fn aggregates_region_is_hidden_from_options_but_summed() {
    let mut engine =
        ExplorerEngine::new(NullRenderer::default(), ExplorerConfig::default()).expect("engine init");
    engine.load_records(records());

    let keys: Vec<&str> = engine
        .display_series()
        .iter()
        .map(|series| series.key.as_str())
        .collect();
    assert_eq!(keys, vec!["Europe", "Africa", "Aggregates"]);
    assert!(!engine.regions().iter().any(|region| region == "Aggregates"));
}

#[test]
fn filters_that_match_nothing_yield_empty_view() {
    let mut engine =
        ExplorerEngine::new(NullRenderer::default(), ExplorerConfig::default()).expect("engine init");
    engine.load_records(records());
    engine.set_region(Selection::only("Africa"));
    engine.set_country(Selection::only("France"));

    assert!(engine.display_series().is_empty());
    assert_eq!(engine.y_domain(), (0.0, 1.05));
    engine.render().expect("empty render");
    assert_eq!(engine.renderer().last_series_count, 0);
}
