use tourism_explorer::api::{
    ExplorerConfig, ExplorerEngine, VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshot,
};
use tourism_explorer::core::{ArrivalRecord, Measure, Selection, load_records_from_reader};
use tourism_explorer::render::NullRenderer;

fn engine() -> ExplorerEngine<NullRenderer> {
    let mut engine =
        ExplorerEngine::new(NullRenderer::default(), ExplorerConfig::default()).expect("engine");
    engine.load_records(vec![
        ArrivalRecord::new("France", "FRA", "Europe", 2010, 80.0),
        ArrivalRecord::new("France", "FRA", "Europe", 2011, 100.0),
        ArrivalRecord::new("Chile", "CHL", "Americas", 2010, 4.0),
        ArrivalRecord::new("Chile", "CHL", "Americas", 2011, 5.0),
    ]);
    engine
}

#[test]
fn snapshot_contract_v1_round_trips() {
    let mut engine = engine();
    engine.set_region(Selection::only("Europe"));
    engine.set_measure(Measure::Growth);
    engine.toggle_focus("France");

    let snapshot = engine.snapshot();
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert_eq!(value["schema_version"], VIEW_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(value["snapshot"]["state"]["measure"], "growth");
    assert_eq!(value["snapshot"]["state"]["focused"], "France");

    let restored = ViewSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, snapshot);
}

#[test]
fn bare_snapshot_is_accepted() {
    let snapshot = engine().snapshot();
    let bare = serde_json::to_string(&snapshot).expect("serialize");
    assert_eq!(
        ViewSnapshot::from_json_compat_str(&bare).expect("parse bare"),
        snapshot
    );
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = engine().snapshot();
    let payload = serde_json::json!({ "schema_version": 99, "snapshot": snapshot });
    let err = ViewSnapshot::from_json_compat_str(&payload.to_string()).expect_err("version");
    assert!(err.to_string().contains("unsupported snapshot schema version"));
}

#[test]
fn snapshot_reflects_derived_view() {
    let mut engine = engine();
    engine.set_measure(Measure::GrowthRate);
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.regions, vec!["Americas".to_owned(), "Europe".to_owned()]);
    assert_eq!(snapshot.x_domain, (2010.0, 2011.0));
    assert_eq!(snapshot.axis_label, "Growth Rate (% of 2010 baseline)");
    assert_eq!(snapshot.series.len(), 2);
    assert_eq!(snapshot.legend.len(), 2);
    assert_eq!(snapshot.stats.entries.len(), 2);
}

#[test]
fn missing_arrivals_survive_contract_round_trip() {
    let csv = "country,iso3,region,year,arrivals\nA,AAA,R,2000,100\nA,AAA,R,2001,..\n";
    let records = load_records_from_reader(csv.as_bytes()).expect("load csv");
    let mut engine =
        ExplorerEngine::new(NullRenderer::default(), ExplorerConfig::default()).expect("engine");
    engine.load_records(records);
    engine.set_country(Selection::only("A"));

    let json = engine
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");
    assert!(value["snapshot"]["series"][0]["values"][1]["arrivals"].is_null());

    let restored = ViewSnapshot::from_json_compat_str(&json).expect("parse contract");
    let series = &restored.series[0];
    assert_eq!(series.values[0].arrivals, 100.0);
    assert!(series.values[1].arrivals.is_nan());
    assert!(series.original_values[1].arrivals.is_nan());
    assert_eq!(restored.state, engine.snapshot().state);
}
