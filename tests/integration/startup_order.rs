// Ordering guarantees across the buffering-to-direct transition

use crate::common::{messages, MemorySink};
use bootlog::{Level, LogFacade, LogFormat};
use std::path::PathBuf;
use uuid::Uuid;

#[test]
fn test_backlog_flushes_in_fifo_order() {
    let facade = LogFacade::new();
    for i in 0..10 {
        facade.info(format!("record {i}"));
    }

    let (sink, captured) = MemorySink::new();
    facade.mark_initialized(Box::new(sink));
    facade.wait_for_drain();
    assert!(facade.drain_complete());

    let msgs = messages(&captured);
    assert_eq!(msgs.len(), 11);
    for i in 0..10 {
        assert_eq!(msgs[i], format!("record {i}"));
    }
    assert_eq!(msgs[10], "Logger initialized");
}

#[test]
fn test_capacity_two_scenario() {
    let facade = LogFacade::with_capacity(2);
    facade.info("a");
    facade.info("b");
    facade.info("c");

    let (sink, captured) = MemorySink::new();
    facade.mark_initialized(Box::new(sink));
    facade.wait_for_drain();

    assert_eq!(messages(&captured), vec!["a", "b", "Logger initialized"]);
    assert_eq!(facade.dropped_records(), 1);
}

#[test]
fn test_direct_write_lands_after_entire_backlog() {
    let facade = LogFacade::new();
    for i in 0..50 {
        facade.info(format!("early {i}"));
    }

    let (sink, captured) = MemorySink::new();
    facade.mark_initialized(Box::new(sink));
    // mark_initialized has returned, so this is a direct-path write
    facade.info("late");

    let msgs = messages(&captured);
    assert_eq!(msgs.len(), 52);
    for i in 0..50 {
        assert_eq!(msgs[i], format!("early {i}"));
    }
    assert_eq!(msgs[50], "Logger initialized");
    assert_eq!(msgs[51], "late");
}

#[test]
fn test_levels_survive_the_drain() {
    let facade = LogFacade::new();
    facade.trace("t");
    facade.warn("w");
    facade.error("e");

    let (sink, captured) = MemorySink::new();
    facade.mark_initialized(Box::new(sink));
    facade.wait_for_drain();

    let records = captured.lock().unwrap();
    assert_eq!(records[0], (Level::Trace, "t".to_string()));
    assert_eq!(records[1], (Level::Warn, "w".to_string()));
    assert_eq!(records[2], (Level::Error, "e".to_string()));
    assert_eq!(records[3].0, Level::Info);
}

#[test]
fn test_drain_applies_sink_filter() {
    // The backlog keeps everything; the sink's min-level filter applies at
    // write time, during the drain as much as on the direct path.
    let path = PathBuf::from(format!("/tmp/test_bootlog_drainfilter_{}.log", Uuid::new_v4()));

    let facade = LogFacade::new();
    facade.trace("below threshold");
    facade.info("kept");

    let sink = bootlog::FileSink::open(&path, LogFormat::Pretty, Level::Info).unwrap();
    facade.mark_initialized(Box::new(sink));
    facade.wait_for_drain();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("kept"));
    assert!(lines[1].ends_with("Logger initialized"));

    let _ = std::fs::remove_file(&path);
}
