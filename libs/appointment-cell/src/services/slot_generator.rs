use chrono::{DateTime, Duration, Timelike, Utc};

/// First bookable hour of the day, UTC.
pub const BUSINESS_START_HOUR: u32 = 8;
/// Last bookable hour of the day, UTC (inclusive).
pub const BUSINESS_END_HOUR: u32 = 16;
/// New patients are steered towards the end of the day.
pub const NEW_PATIENT_START_HOUR: u32 = 15;

/// Produces the next candidate slot after `time`, or `None` once the day
/// has no more candidates.
///
/// Non-new patients walk hour by hour from the first business hour after
/// `time` up to 16:00. For new patients the hour is first pinned to 15:00
/// (or 16:00 when already at 15:00) and then advanced like any other
/// request, so the only slot ever produced is 16:00; asking again from
/// 16:00 yields `None`.
pub fn next_slot(time: DateTime<Utc>, is_new: bool) -> Option<DateTime<Utc>> {
    let mut time = time;

    if is_new {
        time = match time.hour() {
            hour if hour < NEW_PATIENT_START_HOUR => time.with_hour(NEW_PATIENT_START_HOUR)?,
            NEW_PATIENT_START_HOUR => time.with_hour(NEW_PATIENT_START_HOUR + 1)?,
            _ => return None,
        };
    }

    time = if time.hour() < BUSINESS_START_HOUR {
        time.with_hour(BUSINESS_START_HOUR)?
    } else {
        time + Duration::hours(1)
    };

    let slot = time.with_minute(0)?.with_second(0)?.with_nanosecond(0)?;

    // Stepping past 23:00 lands on the next day's early hours
    (BUSINESS_START_HOUR..=BUSINESS_END_HOUR)
        .contains(&slot.hour())
        .then_some(slot)
}

/// Iterator over every candidate slot [`next_slot`] yields for one
/// preferred day, in order.
#[derive(Debug, Clone)]
pub struct DaySlots {
    cursor: Option<DateTime<Utc>>,
    is_new: bool,
}

impl DaySlots {
    pub fn new(day: DateTime<Utc>, is_new: bool) -> Self {
        Self {
            cursor: next_slot(day, is_new),
            is_new,
        }
    }
}

impl Iterator for DaySlots {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        self.cursor = next_slot(current, self.is_new);
        Some(current)
    }
}
