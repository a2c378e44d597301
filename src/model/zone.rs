use std::fmt;

use chrono::{FixedOffset, Local, MappedLocalTime, NaiveDate, NaiveDateTime, TimeZone};

/// Timezone that arrival times are read in.
///
/// `Local` resolves each date with the system zone's own rules, so a winter
/// arrival entered in summer still gets the winter offset. `Fixed` pins one
/// offset for every date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalZone {
    Local,
    Fixed(FixedOffset),
}

impl TimeZone for ArrivalZone {
    type Offset = FixedOffset;

    fn from_offset(offset: &FixedOffset) -> Self {
        Self::Fixed(*offset)
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<FixedOffset> {
        match self {
            Self::Local => Local.offset_from_local_date(local),
            Self::Fixed(offset) => offset.offset_from_local_date(local),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset> {
        match self {
            Self::Local => Local.offset_from_local_datetime(local),
            Self::Fixed(offset) => offset.offset_from_local_datetime(local),
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        match self {
            Self::Local => Local.offset_from_utc_date(utc),
            Self::Fixed(offset) => offset.offset_from_utc_date(utc),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        match self {
            Self::Local => Local.offset_from_utc_datetime(utc),
            Self::Fixed(offset) => offset.offset_from_utc_datetime(utc),
        }
    }
}

impl fmt::Display for ArrivalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
