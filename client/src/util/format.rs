//! Display formatting for money, dates and identifiers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Whole-dollar price, rounding halves away from zero.
pub fn money(amount: f64) -> String {
    format!("NT$ {:.0}", amount.round())
}

/// First eight characters of an identifier followed by an ellipsis.
pub fn short_id(id: &str) -> String {
    let head: String = id.chars().take(8).collect();
    format!("{head}...")
}

/// How a charged amount compares with the catalog price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmountNote {
    AtPrice,
    ExtraCharges,
    Discounted,
}

impl AmountNote {
    pub fn of(amount: f64, catalog_price: f64) -> Self {
        if (amount - catalog_price).abs() < f64::EPSILON {
            Self::AtPrice
        } else if amount > catalog_price {
            Self::ExtraCharges
        } else {
            Self::Discounted
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::AtPrice => None,
            Self::ExtraCharges => Some("Includes extra charges"),
            Self::Discounted => Some("Discounted"),
        }
    }
}

pub fn paid_label(is_paid: bool) -> &'static str {
    if is_paid { "Paid" } else { "Unpaid" }
}

/// Backend timestamps come as RFC 3339, offset-less ISO, or a bare date.
fn parse<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0))?;
    tz.from_local_datetime(&naive).earliest()
}

/// `YYYY/MM/DD HH:MM` in `tz`; unparseable input is returned unchanged.
pub fn datetime_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    parse(raw, tz).map_or_else(|| raw.to_owned(), |dt| dt.format("%Y/%m/%d %H:%M").to_string())
}

/// `YYYY/MM/DD` in `tz`; unparseable input is returned unchanged.
pub fn date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    parse(raw, tz).map_or_else(|| raw.to_owned(), |dt| dt.format("%Y/%m/%d").to_string())
}

/// [`datetime_in`] the browser's local zone.
pub fn datetime(raw: Option<&str>) -> String {
    raw.map(|r| datetime_in(r, &Local)).unwrap_or_default()
}

/// [`date_in`] the browser's local zone.
pub fn date(raw: Option<&str>) -> String {
    raw.map(|r| date_in(r, &Local)).unwrap_or_default()
}
