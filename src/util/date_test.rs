use super::*;

#[test]
fn date_portion_strips_time() {
    assert_eq!(date_portion("2026-08-01T09:30:00.000Z"), "2026-08-01");
}

#[test]
fn date_portion_passes_through_plain_dates() {
    assert_eq!(date_portion("2026-08-01"), "2026-08-01");
}

#[test]
fn native_formatting_uses_date_portion() {
    assert_eq!(format_timestamp("2026-08-01T09:30:00.000Z"), "2026-08-01");
}
