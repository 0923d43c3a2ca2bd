//! Monitor integration tests: config → bots → cycles over a dump file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use eve_ui_parser::monitor::{
    AlarmKind, CycleOutcome, FileDump, Monitor, MonitorConfig, RecordingAlarmSink,
};
use serde_json::{json, Value};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn node(address: u64, type_name: &str, attrs: Value, children: Vec<Value>) -> Value {
    json!({
        "pythonObjectAddress": address,
        "pythonObjectTypeName": type_name,
        "dictEntriesOfInterest": attrs,
        "children": children,
    })
}

fn at(x: f64, y: f64, w: f64, h: f64, extra: Value) -> Value {
    let mut attrs = json!({"_displayX": x, "_displayY": y, "_displayWidth": w, "_displayHeight": h});
    if let (Some(target), Some(source)) = (attrs.as_object_mut(), extra.as_object()) {
        target.extend(source.clone());
    }
    attrs
}

fn local_dump(pilots: &[(&str, Option<&str>)]) -> Value {
    let users: Vec<Value> = pilots
        .iter()
        .enumerate()
        .map(|(i, (name, standing))| {
            let base = 100 + 10 * i as u64;
            let mut children = vec![node(base + 1, "EveLabelMedium", at(20.0, 0.0, 100.0, 14.0, json!({"_text": name})), vec![])];
            if let Some(hint) = standing {
                children.push(node(base + 2, "FlagIconWithState", at(0.0, 0.0, 9.0, 9.0, json!({"_hint": hint})), vec![]));
            }
            node(base, "XmppChatSimpleUserEntry", at(0.0, 20.0 * i as f64, 200.0, 20.0, json!({})), children)
        })
        .collect();

    node(
        1,
        "UIRoot",
        at(0.0, 0.0, 1920.0, 1080.0, json!({})),
        vec![node(
            10,
            "ChatWindowStack",
            at(0.0, 600.0, 400.0, 300.0, json!({})),
            vec![node(
                11,
                "XmppChatWindow",
                at(0.0, 0.0, 400.0, 300.0, json!({"_name": "chatchannel_local"})),
                vec![node(12, "Container", at(200.0, 0.0, 200.0, 300.0, json!({"_name": "userlist"})), users)],
            )],
        )],
    )
}

fn write_dump(name: &str, dump: &Value) -> PathBuf {
    let dir = std::env::temp_dir().join("eve-ui-parser-monitor-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{}.json", name));
    std::fs::write(&path, dump.to_string()).unwrap();
    path
}

fn local_config() -> MonitorConfig {
    MonitorConfig::from_json(r#"{"CharacterName": "Me", "LocalChatMonitor": {}}"#).unwrap()
}

fn monitor(path: PathBuf, config: &MonitorConfig) -> (Monitor<FileDump>, Arc<RecordingAlarmSink>) {
    let sink = Arc::new(RecordingAlarmSink::new());
    let monitor = Monitor::new(
        FileDump::new(path),
        config.build_bots().unwrap(),
        Box::new(Arc::clone(&sink)),
        config.monitor_down_after(),
    );
    (monitor, sink)
}

// ─────────────────────────────────────────────────────────────────────────────
// CYCLE TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_hostile_in_local_raises_alarm() {
    let path = write_dump(
        "hostile",
        &local_dump(&[("Me", None), ("Friend", Some("Pilot has Excellent Standing")), ("Neut", None)]),
    );
    let (mut m, sink) = monitor(path, &local_config());

    assert_eq!(m.run_cycle(), CycleOutcome::Success);

    let alarms = sink.take();
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].kind, AlarmKind::Hostiles);
    assert_eq!(alarms[0].beeps, 2);
    assert!(alarms[0].message.contains("Neut"));
    assert!(!alarms[0].message.contains("Friend"));
}

#[test]
fn test_friendly_local_is_quiet() {
    let path = write_dump("friendly", &local_dump(&[("Me", None), ("Corpmate", Some("Pilot is in your corporation"))]));
    let (mut m, sink) = monitor(path, &local_config());

    for _ in 0..3 {
        assert_eq!(m.run_cycle(), CycleOutcome::Success);
    }
    assert!(sink.take().is_empty());
}

#[test]
fn test_missing_local_fails_cycle_and_saves_debug_copy() {
    let path = write_dump("no-local", &node(1, "UIRoot", json!({}), vec![]));
    let debug_dir = std::env::temp_dir().join("eve-ui-parser-monitor-debug");
    let (m, _sink) = monitor(path, &local_config());
    let mut m = m.with_debug_dir(&debug_dir);

    let now = Local::now();
    assert_eq!(m.run_cycle_at(now), CycleOutcome::BotFailed);
    assert!(debug_dir.join(format!("debug-{}.json", now.timestamp_millis())).exists());
}

#[test]
fn test_monitor_down_after_repeated_failures() {
    let config = MonitorConfig::from_json(
        r#"{"CharacterName": "Me", "LocalChatMonitor": {}, "MonitorDownSecs": 10}"#,
    )
    .unwrap();
    assert_eq!(config.monitor_down_after(), Duration::from_secs(10));

    let (mut m, sink) = monitor(PathBuf::from("/nonexistent/dump.json"), &config);
    let start = m.last_success();

    assert_eq!(m.run_cycle_at(start + chrono::Duration::seconds(5)), CycleOutcome::ReadFailed);
    assert_eq!(sink.count(AlarmKind::MonitorDown), 0);

    assert_eq!(m.run_cycle_at(start + chrono::Duration::seconds(11)), CycleOutcome::ReadFailed);
    assert_eq!(sink.count(AlarmKind::MonitorDown), 1);
    assert_eq!(m.last_success(), start);
}

#[test]
fn test_no_bots_configured() {
    let config = MonitorConfig::from_json(r#"{"CharacterName": "Me"}"#).unwrap();
    assert!(config.build_bots().is_err());
}
