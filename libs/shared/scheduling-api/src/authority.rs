//! Collaborator seams for the remote scheduling authority.
//!
//! Every call is a single round trip; callers await each one before
//! issuing the next.

use async_trait::async_trait;

use shared_models::{ApiError, Appointment, AppointmentRequest};

/// Run lifecycle of the remote calendar.
#[async_trait]
pub trait CalendarLifecycle: Send + Sync {
    /// Resets the remote calendar and begins a run.
    async fn start(&self) -> Result<(), ApiError>;

    /// Ends the run. Later calls fail with [`ApiError::State`].
    async fn stop(&self) -> Result<(), ApiError>;

    /// Returns the full booked schedule. Only allowed once per run.
    async fn fetch_schedule(&self) -> Result<Vec<Appointment>, ApiError>;
}

/// FIFO queue of pending requests.
#[async_trait]
pub trait RequestSource: Send + Sync {
    /// `Ok(None)` is the end-of-stream sentinel.
    async fn next_request(&self) -> Result<Option<AppointmentRequest>, ApiError>;
}

/// Accepts bookings on the remote calendar.
#[async_trait]
pub trait Committer: Send + Sync {
    async fn mark_appointment(&self, appointment: &Appointment) -> Result<(), ApiError>;
}

/// Everything a scheduling run talks to.
pub trait SchedulingAuthority: CalendarLifecycle + RequestSource + Committer {}

impl<T> SchedulingAuthority for T where T: CalendarLifecycle + RequestSource + Committer {}
