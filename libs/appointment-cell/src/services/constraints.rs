use chrono::{DateTime, Datelike, Month, Utc, Weekday};
use tracing::warn;

use crate::services::mirror::ScheduleMirror;

/// Appointments for the same person must be at least this many whole days apart.
pub const MIN_DAYS_BETWEEN_APPOINTMENTS: i64 = 7;

const CLOSED_WEEKEND_MONTHS: [Month; 2] = [Month::November, Month::December];

/// Saturdays and Sundays in November and December are not bookable.
pub fn is_seasonal_weekend_excluded(date: DateTime<Utc>) -> bool {
    let in_season = CLOSED_WEEKEND_MONTHS
        .iter()
        .any(|month| month.number_from_month() == date.month());

    in_season && matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True when `person_id` already holds an appointment less than
/// [`MIN_DAYS_BETWEEN_APPOINTMENTS`] whole days away from `date`, in
/// either direction. Rows whose timestamp cannot be read never conflict.
pub fn has_nearby_appointment(mirror: &ScheduleMirror, date: DateTime<Utc>, person_id: i64) -> bool {
    mirror.appointments_for(person_id).any(|appointment| {
        match appointment.scheduled_at() {
            Some(booked) => (booked - date).abs().num_days() < MIN_DAYS_BETWEEN_APPOINTMENTS,
            None => {
                warn!(
                    "Skipping unreadable appointment time {:?} for person {}",
                    appointment.appointment_time, person_id
                );
                false
            }
        }
    })
}

/// True unless `doctor_id` is already booked at exactly `time`.
pub fn is_slot_free(mirror: &ScheduleMirror, time: DateTime<Utc>, doctor_id: i64) -> bool {
    !mirror.iter().any(|appointment| {
        appointment.doctor_id == doctor_id && appointment.scheduled_at() == Some(time)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use shared_models::Appointment;

    fn booked(doctor_id: i64, person_id: i64, time: &str) -> Appointment {
        Appointment {
            doctor_id,
            person_id,
            appointment_time: time.to_string(),
            is_new_patient_appointment: false,
            request_id: None,
        }
    }

    #[test]
    fn test_november_weekend_excluded() {
        // 2025-11-01 is a Saturday
        let saturday = Utc.with_ymd_and_hms(2025, 11, 1, 9, 0, 0).unwrap();
        let sunday = saturday + Duration::days(1);
        let monday = saturday + Duration::days(2);

        assert!(is_seasonal_weekend_excluded(saturday));
        assert!(is_seasonal_weekend_excluded(sunday));
        assert!(!is_seasonal_weekend_excluded(monday));
    }

    #[test]
    fn test_december_weekend_excluded() {
        // 2025-12-06 is a Saturday
        let saturday = Utc.with_ymd_and_hms(2025, 12, 6, 9, 0, 0).unwrap();
        assert!(is_seasonal_weekend_excluded(saturday));
    }

    #[test]
    fn test_weekend_outside_season_allowed() {
        // 2025-10-25 is a Saturday, 2025-06-07 too
        let october = Utc.with_ymd_and_hms(2025, 10, 25, 9, 0, 0).unwrap();
        let june = Utc.with_ymd_and_hms(2025, 6, 7, 9, 0, 0).unwrap();

        assert!(!is_seasonal_weekend_excluded(october));
        assert!(!is_seasonal_weekend_excluded(june));
    }

    #[test]
    fn test_nearby_appointment_boundary() {
        let mirror = ScheduleMirror::from_snapshot(vec![booked(1, 42, "2025-06-02T10:00:00Z")]);
        let booked_at = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();

        assert!(has_nearby_appointment(&mirror, booked_at + Duration::days(6), 42));
        assert!(!has_nearby_appointment(&mirror, booked_at + Duration::days(7), 42));
        assert!(has_nearby_appointment(&mirror, booked_at - Duration::days(6), 42));
        assert!(!has_nearby_appointment(&mirror, booked_at - Duration::days(7), 42));
    }

    #[test]
    fn test_nearby_appointment_partial_days_truncate() {
        let mirror = ScheduleMirror::from_snapshot(vec![booked(1, 42, "2025-06-02T10:00:00Z")]);
        let almost_a_week_later = Utc.with_ymd_and_hms(2025, 6, 9, 9, 0, 0).unwrap();
        let almost_a_week_earlier = Utc.with_ymd_and_hms(2025, 5, 26, 11, 0, 0).unwrap();

        assert!(has_nearby_appointment(&mirror, almost_a_week_later, 42));
        assert!(has_nearby_appointment(&mirror, almost_a_week_earlier, 42));
    }

    #[test]
    fn test_nearby_appointment_ignores_other_people() {
        let mirror = ScheduleMirror::from_snapshot(vec![booked(1, 42, "2025-06-02T10:00:00Z")]);
        let same_day = Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0).unwrap();

        assert!(!has_nearby_appointment(&mirror, same_day, 7));
    }

    #[test]
    fn test_nearby_appointment_skips_unreadable_times() {
        let mirror = ScheduleMirror::from_snapshot(vec![booked(1, 42, "not-a-date")]);
        let day = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();

        assert!(!has_nearby_appointment(&mirror, day, 42));
    }

    #[test]
    fn test_slot_collision_is_exact() {
        let mirror = ScheduleMirror::from_snapshot(vec![booked(5, 1, "2025-06-02T10:00:00.000Z")]);
        let ten = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        let eleven = Utc.with_ymd_and_hms(2025, 6, 2, 11, 0, 0).unwrap();

        assert!(!is_slot_free(&mirror, ten, 5));
        assert!(is_slot_free(&mirror, ten, 7));
        assert!(is_slot_free(&mirror, eleven, 5));
    }

    #[test]
    fn test_slot_collision_across_timestamp_formats() {
        let mirror = ScheduleMirror::from_snapshot(vec![booked(5, 1, "2025-06-02T10:00:00Z")]);
        let ten = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();

        assert!(!is_slot_free(&mirror, ten, 5));
    }
}
