use chrono::{TimeZone, Utc};
use devbelt::history::{History, MAX_CAPACITY, MIN_CAPACITY};

#[test]
fn capacity_is_clamped() {
    assert_eq!(History::new(0).capacity(), MIN_CAPACITY);
    assert_eq!(History::new(12).capacity(), 12);
    assert_eq!(History::new(1000).capacity(), MAX_CAPACITY);
}

#[test]
fn newest_entries_come_first() {
    let mut history = History::new(10);
    history.record("100 km", "62.137119 mi");
    history.record("0 c", "32 f");
    let entries: Vec<_> = history.entries().collect();
    assert_eq!(entries[0].input, "0 c");
    assert_eq!(entries[1].input, "100 km");
}

#[test]
fn cap_drops_the_oldest() {
    let mut history = History::new(8);
    for i in 0..30 {
        history.record(format!("in{i}"), format!("out{i}"));
    }
    assert_eq!(history.len(), 8);
    let entries: Vec<_> = history.entries().collect();
    assert_eq!(entries[0].input, "in29");
    assert_eq!(entries[7].input, "in22");
}

#[test]
fn records_carry_their_timestamp() {
    let ts = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
    let mut history = History::new(8);
    history.record_at("a", "b", ts);
    assert_eq!(history.entries().next().unwrap().timestamp, ts);
}

#[test]
fn clear_empties_the_history() {
    let mut history = History::default();
    history.record("a", "b");
    assert!(!history.is_empty());
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
}
