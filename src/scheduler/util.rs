use super::SchedError;
use chrono::{Days, NaiveDate};

pub fn parse_date(raw: &str) -> Result<NaiveDate, SchedError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| SchedError::InvalidStartDate(raw.to_string()))
}

pub(super) fn add_days(start: NaiveDate, offset: usize) -> Result<NaiveDate, SchedError> {
    start
        .checked_add_days(Days::new(offset as u64))
        .ok_or(SchedError::DateOverflow)
}
