use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use shared_scheduling_api::Committer;

use crate::models::{Appointment, AppointmentError, AppointmentRequest};
use crate::services::constraints::{has_nearby_appointment, is_seasonal_weekend_excluded, is_slot_free};
use crate::services::mirror::ScheduleMirror;
use crate::services::slot_generator::DaySlots;

/// The (day, time, doctor) triple a request gets bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotChoice {
    pub day: DateTime<Utc>,
    pub time: DateTime<Utc>,
    pub doctor_id: i64,
}

/// Binds requests to slots and keeps the mirror in step with the remote.
///
/// Search order is preferred day, then generated time, then preferred
/// doctor; the first triple passing every check wins.
pub struct Allocator {
    mirror: ScheduleMirror,
}

impl Allocator {
    pub fn new(mirror: ScheduleMirror) -> Self {
        Self { mirror }
    }

    pub fn mirror(&self) -> &ScheduleMirror {
        &self.mirror
    }

    pub fn into_mirror(self) -> ScheduleMirror {
        self.mirror
    }

    pub fn find_slot(&self, request: &AppointmentRequest) -> Option<SlotChoice> {
        for &day in &request.preferred_days {
            if is_seasonal_weekend_excluded(day) {
                debug!("Skipping {} for request {}: seasonal weekend", day, request.request_id);
                continue;
            }
            if has_nearby_appointment(&self.mirror, day, request.person_id) {
                debug!(
                    "Skipping {} for request {}: person {} is booked within a week",
                    day, request.request_id, request.person_id
                );
                continue;
            }

            for time in DaySlots::new(day, request.is_new) {
                let free_doctor = request
                    .preferred_docs
                    .iter()
                    .copied()
                    .find(|&doctor_id| is_slot_free(&self.mirror, time, doctor_id));

                if let Some(doctor_id) = free_doctor {
                    return Some(SlotChoice { day, time, doctor_id });
                }
            }
        }

        None
    }

    /// Binds `request`, commits the booking and records it in the mirror.
    ///
    /// Nothing is committed when no slot fits. A failed commit leaves the
    /// mirror untouched.
    #[instrument(skip(self, request, committer), fields(request_id = request.request_id))]
    pub async fn schedule<C>(
        &mut self,
        request: &AppointmentRequest,
        committer: &C,
    ) -> Result<Appointment, AppointmentError>
    where
        C: Committer + ?Sized,
    {
        let choice = self.find_slot(request).ok_or_else(|| {
            warn!(
                "No slot satisfies request {} for person {}",
                request.request_id, request.person_id
            );
            AppointmentError::allocation(request)
        })?;

        let appointment = Appointment::booked(request, choice.doctor_id, choice.time);
        committer.mark_appointment(&appointment).await?;

        info!(
            "Booked person {} with doctor {} at {}",
            appointment.person_id, appointment.doctor_id, appointment.appointment_time
        );

        self.mirror.append(appointment.clone());
        Ok(appointment)
    }
}
