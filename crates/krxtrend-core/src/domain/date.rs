use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::ValidationError;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date in the `YYYY-MM-DD` shape every feed document is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradeDate(Date);

impl TradeDate {
    /// Today's date in UTC, the anchor of every backward walk.
    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn from_calendar_date(
        year: i32,
        month: time::Month,
        day: u8,
    ) -> Result<Self, ValidationError> {
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: format!("{year:04}-{:02}-{day:02}", month as u8),
            })
    }

    /// The previous calendar day. Saturates at the calendar minimum.
    pub fn pred(self) -> Self {
        match self.0.previous_day() {
            Some(previous) => Self(previous),
            None => self,
        }
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format(self) -> String {
        self.0
            .format(&DATE_FORMAT)
            .expect("calendar date must be formattable")
    }
}

impl Display for TradeDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for TradeDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for TradeDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
