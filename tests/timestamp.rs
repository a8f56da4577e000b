use chrono::{TimeZone, Utc};
use devbelt::timestamp::describe;

fn reference() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn unix_seconds_input() {
    let info = describe("1700000000", reference()).unwrap();
    assert_eq!(info.unix_seconds, 1700000000);
    assert_eq!(info.unix_millis, 1700000000000);
    assert_eq!(info.date, "2023-11-14");
    assert_eq!(info.weekday, "Tuesday");
}

#[test]
fn unix_millis_input() {
    let info = describe("1700000000000", reference()).unwrap();
    assert_eq!(info.unix_seconds, 1700000000);
}

#[test]
fn rfc3339_input() {
    let info = describe("2024-06-01T11:00:00Z", reference()).unwrap();
    assert_eq!(info.relative, "1 hour ago");
    let offset = describe("2024-06-01T13:00:00+02:00", reference()).unwrap();
    assert_eq!(offset.unix_seconds, info.unix_seconds);
}

#[test]
fn relative_wording() {
    let r = reference();
    assert_eq!(describe("2024-06-01T11:59:30Z", r).unwrap().relative, "30 seconds ago");
    assert_eq!(describe("2024-06-01T11:58:00Z", r).unwrap().relative, "2 minutes ago");
    assert_eq!(describe("2024-05-30T12:00:00Z", r).unwrap().relative, "2 days ago");
    assert_eq!(describe("2024-06-01T12:00:30Z", r).unwrap().relative, "in 30 seconds");
    assert_eq!(describe("2026-06-01T12:00:00Z", r).unwrap().relative, "in 2 years");
}

#[test]
fn epoch_zero() {
    let info = describe("0", reference()).unwrap();
    assert_eq!(info.date, "1970-01-01");
}

#[test]
fn pre_epoch_timestamps_are_negative() {
    let info = describe("-86400", reference()).unwrap();
    assert_eq!(info.date, "1969-12-31");
}

#[test]
fn garbage_input_is_rejected() {
    assert!(describe("", reference()).is_err());
    assert!(describe("next tuesday", reference()).is_err());
    assert!(describe("2024-13-99", reference()).is_err());
}
