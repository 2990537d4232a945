#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use appointment_cell::{Appointment, AppointmentRequest};
use shared_models::ApiError;
use shared_scheduling_api::{CalendarLifecycle, Committer, RequestSource};

/// In-memory stand-in for the remote scheduling authority.
#[derive(Default)]
pub struct FakeAuthority {
    snapshot: Vec<Appointment>,
    requests: Mutex<VecDeque<AppointmentRequest>>,
    committed: Mutex<Vec<Appointment>>,
    reject_commits: bool,
    stopped: Mutex<bool>,
}

impl FakeAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, snapshot: Vec<Appointment>) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub fn with_requests(self, requests: Vec<AppointmentRequest>) -> Self {
        *self.requests.lock().unwrap() = requests.into();
        self
    }

    pub fn rejecting_commits(mut self) -> Self {
        self.reject_commits = true;
        self
    }

    pub fn committed(&self) -> Vec<Appointment> {
        self.committed.lock().unwrap().clone()
    }

    pub fn pending(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn is_stopped(&self) -> bool {
        *self.stopped.lock().unwrap()
    }
}

#[async_trait]
impl CalendarLifecycle for FakeAuthority {
    async fn start(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn stop(&self) -> Result<(), ApiError> {
        *self.stopped.lock().unwrap() = true;
        Ok(())
    }

    async fn fetch_schedule(&self) -> Result<Vec<Appointment>, ApiError> {
        Ok(self.snapshot.clone())
    }
}

#[async_trait]
impl RequestSource for FakeAuthority {
    async fn next_request(&self) -> Result<Option<AppointmentRequest>, ApiError> {
        if self.is_stopped() {
            return Err(ApiError::State("stopped".to_string()));
        }
        Ok(self.requests.lock().unwrap().pop_front())
    }
}

#[async_trait]
impl Committer for FakeAuthority {
    async fn mark_appointment(&self, appointment: &Appointment) -> Result<(), ApiError> {
        if self.reject_commits {
            return Err(ApiError::Capacity("calendar is full".to_string()));
        }
        self.committed.lock().unwrap().push(appointment.clone());
        Ok(())
    }
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

pub fn request(
    request_id: i64,
    person_id: i64,
    is_new: bool,
    preferred_days: Vec<DateTime<Utc>>,
    preferred_docs: Vec<i64>,
) -> AppointmentRequest {
    AppointmentRequest {
        request_id,
        person_id,
        is_new,
        preferred_days,
        preferred_docs,
    }
}

pub fn booked(doctor_id: i64, person_id: i64, time: &str) -> Appointment {
    Appointment {
        doctor_id,
        person_id,
        appointment_time: time.to_string(),
        is_new_patient_appointment: false,
        request_id: None,
    }
}
