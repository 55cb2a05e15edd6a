use gridsync_cli::{inspect, item_json, place, replay, ReplayOptions};
use gridsync_model::PlacementConfig;
use gridsync_sync::SyncConfig;
use gridsync_types::GridItem;
use pretty_assertions::assert_eq;

const LAYOUT: &str = r#"{
    "revision": 4, "columns": 12, "rowHeight": 30,
    "compact": true, "compactType": "vertical",
    "items": [
        { "i": "a", "x": 0, "y": 0, "w": 4, "h": 3 },
        { "i": "b", "x": 4, "y": 0, "w": 4, "h": 3, "static": true }
    ]
}"#;

const LIVE: ReplayOptions = ReplayOptions {
    initial_push: true,
    strict: false,
};

// ── inspect ──────────────────────────────────────────────────────

#[test]
fn inspect_summarizes_layout() {
    let report = inspect(LAYOUT).unwrap();
    let text = report.to_string();

    assert_eq!(report.layout.len(), 2);
    assert!(report.overlaps.is_empty());
    assert!(report.out_of_bounds.is_empty());
    assert!(text.contains("revision:    4"));
    assert!(text.contains("a@(0,0) 4x3"));
    assert!(text.contains("b@(4,0) 4x3 [static]"));
}

#[test]
fn inspect_flags_overlaps_and_overflow() {
    let json = r#"{ "columns": 6, "items": [
        { "i": "a", "x": 0, "y": 0, "w": 4, "h": 3 },
        { "i": "b", "x": 3, "y": 2, "w": 4, "h": 3 }
    ] }"#;
    let report = inspect(json).unwrap();

    assert_eq!(report.overlaps, vec![("a".to_string(), "b".to_string())]);
    assert_eq!(report.out_of_bounds, vec!["b".to_string()]);
    assert!(report.to_string().contains("warning: a overlaps b"));
}

#[test]
fn inspect_rejects_malformed_document() {
    let err = inspect(r#"{ "items": [ { "i": "a" } ] }"#).unwrap_err();
    assert!(err.to_string().contains("Failed to decode"));
}

// ── place ────────────────────────────────────────────────────────

#[test]
fn place_finds_first_fit() {
    let item = place(LAYOUT, "c", 4, 3, &PlacementConfig::default()).unwrap();
    assert_eq!(item, GridItem::new("c", 8, 0, 4, 3));
}

#[test]
fn place_full_width_goes_below() {
    let item = place(LAYOUT, "wide", 12, 1, &PlacementConfig::default()).unwrap();
    assert_eq!((item.x, item.y), (0, 3));
}

#[test]
fn place_rejects_zero_size() {
    assert!(place(LAYOUT, "c", 0, 3, &PlacementConfig::default()).is_err());
    assert!(place(LAYOUT, "", 1, 1, &PlacementConfig::default()).is_err());
}

#[test]
fn item_json_uses_wire_names() {
    let json = item_json(&GridItem::new("c", 8, 0, 4, 3)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["i"], serde_json::json!("c"));
    assert!(value.get("minW").is_none());
}

// ── replay ───────────────────────────────────────────────────────

#[test]
fn replay_counts_outcomes() {
    let events = r#"
# drag of a, throttled
{"items":[{"i":"a","x":1,"y":0,"w":4,"h":3}],"itemId":"a","reason":"DRAG","isDragging":true,"isResizing":false,"revision":5}
{"items":[{"i":"a","x":2,"y":0,"w":4,"h":3}],"itemId":"a","reason":"DRAG","isDragging":true,"isResizing":false,"revision":6}
{"items":[{"i":"a","x":2,"y":0,"w":4,"h":3}],"itemId":"a","reason":"DRAG","isDragging":true,"isResizing":false,"revision":6}
{"items":[{"i":"a","x":8,"y":0,"w":4,"h":3}],"itemId":"a","reason":"DRAG","isDragging":false,"isResizing":false,"revision":7}
{"items":[{"i":"a","x":0,"y":9,"w":4,"h":3}],"revision":4}
{"items":[{"i":"b","x":0,"y":9,"w":4,"h":3}],"revision":8}
not json
"#;
    let report = replay(LAYOUT, events, SyncConfig::default(), LIVE).unwrap();

    assert_eq!(report.accepted, 4);
    assert_eq!(report.intermediate, 2);
    assert_eq!(report.stale, 2);
    assert_eq!(report.echoes, 0);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.layout.get("a").unwrap().x, 8);
    assert_eq!(report.layout.get("b").unwrap().y, 0);
}

#[test]
fn replay_initial_push_discards_echo_of_document_revision() {
    let events = r#"{"items":[{"i":"a","x":5,"y":5,"w":4,"h":3}],"revision":4}"#;

    let live = replay(LAYOUT, events, SyncConfig::default(), LIVE).unwrap();
    assert_eq!(live.stale, 1);

    let cold = replay(LAYOUT, events, SyncConfig::default(), ReplayOptions::default()).unwrap();
    assert_eq!(cold.accepted, 1);
    assert_eq!(cold.layout.get("a").unwrap().x, 5);
}

#[test]
fn replay_strict_stops_on_bad_event() {
    let options = ReplayOptions {
        strict: true,
        ..LIVE
    };
    let err = replay(LAYOUT, "{\"revision\": \"x\"}\n", SyncConfig::default(), options).unwrap_err();
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn replay_report_display() {
    let report = replay(LAYOUT, "", SyncConfig::default(), LIVE).unwrap();
    let text = report.to_string();
    assert!(text.contains("accepted 0"));
    assert!(text.contains("final revision 4 with 2 items"));
}
