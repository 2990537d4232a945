// libs/appointment-cell/src/models.rs
use std::fmt;

use thiserror::Error;

use shared_models::ApiError;

pub use shared_models::{Appointment, AppointmentRequest};

// ==============================================================================
// RUN REPORTING
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub initial_appointments: usize,
    pub requests_processed: usize,
    pub appointments_booked: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requests processed, {} appointments booked ({} already on the calendar)",
            self.requests_processed, self.appointments_booked, self.initial_appointments
        )
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Unable to schedule request {request_id} for person {person_id} with given preferences")]
    Allocation { request_id: i64, person_id: i64 },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppointmentError {
    pub fn allocation(request: &AppointmentRequest) -> Self {
        AppointmentError::Allocation {
            request_id: request.request_id,
            person_id: request.person_id,
        }
    }
}
