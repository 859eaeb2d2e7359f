// Capacity bound, drop-newest policy, drop accounting

use crate::common::{messages, MemorySink};
use bootlog::{LogFacade, DEFAULT_BACKLOG_CAPACITY};

#[test]
fn test_overflow_keeps_earliest_and_counts_drops() {
    let facade = LogFacade::with_capacity(5);
    for i in 0..12 {
        facade.info(format!("r{i}"));
    }
    assert_eq!(facade.backlog_len(), 5);
    assert_eq!(facade.dropped_records(), 7);

    let (sink, captured) = MemorySink::new();
    facade.mark_initialized(Box::new(sink));
    facade.wait_for_drain();

    // The earliest five survive; the drop-newest policy discards the rest
    assert_eq!(
        messages(&captured),
        vec!["r0", "r1", "r2", "r3", "r4", "Logger initialized"]
    );
}

#[test]
fn test_default_capacity_bounds_memory() {
    let facade = LogFacade::new();
    for i in 0..DEFAULT_BACKLOG_CAPACITY + 50 {
        facade.info(format!("r{i}"));
    }
    assert_eq!(facade.backlog_len(), DEFAULT_BACKLOG_CAPACITY);
    assert_eq!(facade.dropped_records(), 50);
}

#[test]
fn test_overflow_is_invisible_to_callers() {
    // Past-capacity calls return normally; the only observable trace of the
    // loss is the counter.
    let facade = LogFacade::with_capacity(1);
    facade.info("kept");
    facade.info("dropped");
    facade.info("dropped too");
    assert_eq!(facade.dropped_records(), 2);

    let (sink, captured) = MemorySink::new();
    facade.mark_initialized(Box::new(sink));
    facade.wait_for_drain();

    assert_eq!(messages(&captured), vec!["kept", "Logger initialized"]);
}
