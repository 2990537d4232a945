use tracing::debug;

use crate::models::Appointment;

/// In-memory copy of every appointment on the remote calendar.
///
/// Seeded once from the remote snapshot and only ever appended to after a
/// successful commit, so every later check sees every earlier booking.
#[derive(Debug, Clone, Default)]
pub struct ScheduleMirror {
    appointments: Vec<Appointment>,
}

impl ScheduleMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Vec<Appointment>) -> Self {
        debug!("Seeding schedule mirror with {} appointments", snapshot.len());
        Self { appointments: snapshot }
    }

    pub fn append(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    /// Every appointment held by `person_id`, in booking order.
    pub fn appointments_for(&self, person_id: i64) -> impl Iterator<Item = &Appointment> {
        self.appointments
            .iter()
            .filter(move |appointment| appointment.person_id == person_id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn into_appointments(self) -> Vec<Appointment> {
        self.appointments
    }
}
