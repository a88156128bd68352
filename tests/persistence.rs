//! JSON Lines persistence tests.

use std::path::Path;

use hue_log::config::LoggerConfig;
use hue_log::format::sanitize::decode_bytes;
use hue_log::{emit, Arg, Colorizer, Level, LogLine};
use serde_json::{json, Value};

mod common;

fn file_config(path: &Path, level: Level) -> LoggerConfig {
    LoggerConfig {
        level,
        file_path: path.to_string_lossy().into_owned(),
        ..LoggerConfig::default()
    }
}

#[test]
fn test_every_level_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.jsonl");
    let (logger, console) = common::capture_logger(file_config(&path, Level::Error));

    for level in Level::ALL {
        logger.emit(level, &Colorizer::none(), "at %s", &[Arg::from(level.as_str())]);
    }

    let lines = common::read_lines(&path);
    assert_eq!(lines.len(), Level::ALL.len());
    for (line, level) in lines.iter().zip(Level::ALL) {
        let record: LogLine = serde_json::from_str(line).unwrap();
        assert_eq!(record.level, level);
        assert_eq!(record.args, vec![json!(level.as_str())]);
    }
    // Only the Error line passed the console gate.
    assert_eq!(console.text(), "[Error] at Error\n");
}

#[test]
fn test_disabled_path_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (logger, _console) = common::capture_logger(LoggerConfig::default());
    for _ in 0..10 {
        emit!(logger, Level::Info, &Colorizer::none(), "nothing on disk");
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_record_matches_documented_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.jsonl");
    let (logger, _console) = common::capture_logger(file_config(&path, Level::Info));
    let red = logger.colorizer("Red");

    emit!(logger, Level::Info, &red, "error: %s\n%s", "something", "went wrong");

    let lines = common::read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains('\x1b'));
    let mut value: Value = serde_json::from_str(&lines[0]).unwrap();
    assert!(value["time"].as_str().unwrap().ends_with('Z'));
    value.as_object_mut().unwrap().remove("time");
    assert_eq!(
        value,
        json!({
            "level": "Info",
            "color": "Red",
            "format": "error: %s\n%s",
            "args": ["something", "went wrong"],
        })
    );
}

#[test]
fn test_bytes_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bytes.jsonl");
    let (logger, console) = common::capture_logger(file_config(&path, Level::Info));
    let payload: Vec<u8> = (0..=255).collect();

    emit!(logger, Level::Info, &Colorizer::none(), "blob %s", payload.clone());

    let record: LogLine = serde_json::from_str(&common::read_lines(&path)[0]).unwrap();
    assert_eq!(decode_bytes(&record.args[0]), Some(payload));
    assert!(console.text().starts_with("[Info] blob <256 bytes: 000102"));
    assert!(console.text().ends_with("…>\n"));
}

#[test]
fn test_tid_recorded_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tid.jsonl");
    let config = LoggerConfig {
        use_tid: true,
        ..file_config(&path, Level::Info)
    };
    let (logger, _console) = common::capture_logger(config);
    emit!(logger, Level::Info, &Colorizer::none(), "x");

    let record: LogLine = serde_json::from_str(&common::read_lines(&path)[0]).unwrap();
    assert!(record.tid.is_some());
}

#[test]
fn test_reconfigure_moves_records() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.jsonl");
    let second = dir.path().join("second.jsonl");
    let (logger, _console) = common::capture_logger(file_config(&first, Level::Info));

    emit!(logger, Level::Info, &Colorizer::none(), "one");
    logger.reconfigure(LoggerConfig {
        time_format: String::new(),
        ..file_config(&second, Level::Info)
    });
    emit!(logger, Level::Info, &Colorizer::none(), "two");
    logger.reconfigure(LoggerConfig {
        time_format: String::new(),
        ..LoggerConfig::default()
    });
    emit!(logger, Level::Info, &Colorizer::none(), "three");

    assert_eq!(common::read_lines(&first).len(), 1);
    assert_eq!(common::read_lines(&second).len(), 1);
}

#[test]
fn test_unwritable_path_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    // The configured path is a directory; appends fail on every call.
    let (logger, console) = common::capture_logger(file_config(dir.path(), Level::Info));

    emit!(logger, Level::Info, &Colorizer::none(), "still %s", "printed");
    emit!(logger, Level::Info, &Colorizer::none(), "again");

    assert_eq!(console.text(), "[Info] still printed\n[Info] again\n");
}
