use tracing::{info, instrument};

use shared_config::AppConfig;
use shared_scheduling_api::SchedulingAuthority;

use crate::models::{AppointmentError, RunSummary};
use crate::services::allocator::Allocator;
use crate::services::mirror::ScheduleMirror;

#[derive(Debug)]
pub struct RunOutcome {
    pub summary: RunSummary,
    pub schedule: ScheduleMirror,
}

/// One pass over the remote request queue.
///
/// Resets the calendar, mirrors the booked schedule, then allocates each
/// request in arrival order until the queue reports it is drained. The
/// first error ends the run; bookings made before it stay committed.
pub struct SchedulingRun<'a, A: ?Sized> {
    authority: &'a A,
    stop_on_completion: bool,
}

impl<'a, A> SchedulingRun<'a, A>
where
    A: SchedulingAuthority + ?Sized,
{
    pub fn new(authority: &'a A) -> Self {
        Self {
            authority,
            stop_on_completion: false,
        }
    }

    pub fn from_config(authority: &'a A, config: &AppConfig) -> Self {
        Self::new(authority).stop_on_completion(config.stop_on_completion)
    }

    pub fn stop_on_completion(mut self, stop: bool) -> Self {
        self.stop_on_completion = stop;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<RunOutcome, AppointmentError> {
        info!("Resetting remote calendar");
        self.authority.start().await?;

        let snapshot = self.authority.fetch_schedule().await?;
        let mut summary = RunSummary {
            initial_appointments: snapshot.len(),
            ..RunSummary::default()
        };
        let mut allocator = Allocator::new(ScheduleMirror::from_snapshot(snapshot));

        while let Some(request) = self.authority.next_request().await? {
            summary.requests_processed += 1;
            allocator.schedule(&request, self.authority).await?;
            summary.appointments_booked += 1;
        }

        info!("Request queue drained: {}", summary);

        if self.stop_on_completion {
            info!("Stopping remote calendar");
            self.authority.stop().await?;
        }

        Ok(RunOutcome {
            summary,
            schedule: allocator.into_mirror(),
        })
    }
}
