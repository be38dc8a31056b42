use super::*;
use chrono::{FixedOffset, Utc};

#[test]
fn money_rounds_to_whole_dollars() {
    assert_eq!(money(300.0), "NT$ 300");
    assert_eq!(money(12.5), "NT$ 13");
    assert_eq!(money(0.4), "NT$ 0");
}

#[test]
fn short_id_keeps_eight_chars() {
    assert_eq!(short_id("0f8fad5b-d9cb-469f-a165-70867728950e"), "0f8fad5b...");
    assert_eq!(short_id("abc"), "abc...");
}

#[test]
fn amount_note_compares_with_price() {
    assert_eq!(AmountNote::of(100.0, 100.0), AmountNote::AtPrice);
    assert_eq!(AmountNote::of(150.0, 100.0), AmountNote::ExtraCharges);
    assert_eq!(AmountNote::of(80.0, 100.0), AmountNote::Discounted);
    assert_eq!(AmountNote::AtPrice.label(), None);
    assert_eq!(AmountNote::Discounted.label(), Some("Discounted"));
}

#[test]
fn paid_labels() {
    assert_eq!(paid_label(true), "Paid");
    assert_eq!(paid_label(false), "Unpaid");
}

#[test]
fn datetime_formats_rfc3339_in_zone() {
    assert_eq!(datetime_in("2025-03-01T08:30:00.000+00:00", &Utc), "2025/03/01 08:30");
    let taipei = FixedOffset::east_opt(8 * 3600).unwrap();
    assert_eq!(datetime_in("2025-03-01T20:30:00Z", &taipei), "2025/03/02 04:30");
}

#[test]
fn datetime_accepts_offsetless_iso() {
    assert_eq!(datetime_in("2025-03-01T08:30:15.123", &Utc), "2025/03/01 08:30");
    assert_eq!(datetime_in("2025-03-01T08:30:15", &Utc), "2025/03/01 08:30");
}

#[test]
fn date_formats_bare_dates() {
    assert_eq!(date_in("2025-03-31", &Utc), "2025/03/31");
}

#[test]
fn unparseable_input_is_echoed() {
    assert_eq!(date_in("someday", &Utc), "someday");
    assert_eq!(datetime_in("", &Utc), "");
}

#[test]
fn missing_values_render_empty() {
    assert_eq!(datetime(None), "");
    assert_eq!(date(None), "");
}
