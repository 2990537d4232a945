use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::{ApiError, Appointment, AppointmentRequest};

use crate::authority::{CalendarLifecycle, Committer, RequestSource};

/// HTTP client for the remote scheduling authority.
///
/// The token travels as a `token` query parameter on every call.
pub struct SchedulingApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl SchedulingApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        if config.scheduling_api_token.is_empty() {
            return Err(ApiError::Auth("Scheduling API token is not set".to_string()));
        }

        Ok(Self {
            client: Client::new(),
            base_url: config.scheduling_api_url.trim_end_matches('/').to_string(),
            token: config.scheduling_api_token.clone(),
        })
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client
            .request(method, &url)
            .query(&[("token", self.token.as_str())]);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        Ok(req.send().await?)
    }

    async fn fail(operation: &str, response: Response) -> ApiError {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        error!("{} failed ({}): {}", operation, status, error_text);

        match status {
            StatusCode::UNAUTHORIZED => ApiError::Auth("Invalid token.".to_string()),
            _ => ApiError::protocol(operation, status.as_u16()),
        }
    }
}

#[async_trait]
impl CalendarLifecycle for SchedulingApiClient {
    async fn start(&self) -> Result<(), ApiError> {
        let response = self.send(Method::POST, "/Start", None).await?;
        if response.status() == StatusCode::OK {
            return Ok(());
        }
        Err(Self::fail("Start", response).await)
    }

    async fn stop(&self) -> Result<(), ApiError> {
        let response = self.send(Method::POST, "/Stop", None).await?;
        if response.status() == StatusCode::OK {
            return Ok(());
        }
        Err(Self::fail("Stop", response).await)
    }

    async fn fetch_schedule(&self) -> Result<Vec<Appointment>, ApiError> {
        let response = self.send(Method::GET, "/Schedule", None).await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let schedule: Vec<Appointment> = serde_json::from_str(&body)?;
                debug!("Fetched {} booked appointments", schedule.len());
                Ok(schedule)
            }
            StatusCode::METHOD_NOT_ALLOWED => Err(ApiError::State(
                "The calendar has already been retrieved, reset it first.".to_string(),
            )),
            _ => Err(Self::fail("Schedule", response).await),
        }
    }
}

#[async_trait]
impl RequestSource for SchedulingApiClient {
    async fn next_request(&self) -> Result<Option<AppointmentRequest>, ApiError> {
        let response = self.send(Method::GET, "/AppointmentRequest", None).await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let request: AppointmentRequest = serde_json::from_str(&body)?;
                debug!("Received request {} for person {}", request.request_id, request.person_id);
                Ok(Some(request))
            }
            StatusCode::NO_CONTENT => Ok(None),
            StatusCode::METHOD_NOT_ALLOWED => Err(ApiError::State(
                "Stop endpoint has already been called.".to_string(),
            )),
            _ => Err(Self::fail("AppointmentRequest", response).await),
        }
    }
}

#[async_trait]
impl Committer for SchedulingApiClient {
    async fn mark_appointment(&self, appointment: &Appointment) -> Result<(), ApiError> {
        let body = serde_json::to_value(appointment)?;
        let response = self.send(Method::POST, "/Schedule", Some(body)).await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            StatusCode::METHOD_NOT_ALLOWED => Err(ApiError::State(
                "Stop endpoint has already been called.".to_string(),
            )),
            StatusCode::INTERNAL_SERVER_ERROR => Err(ApiError::Capacity(format!(
                "The schedule was unable to accommodate appointment for person {} at {}",
                appointment.person_id, appointment.appointment_time
            ))),
            _ => Err(Self::fail("MarkAppointment", response).await),
        }
    }
}
