use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

// ==============================================================================
// CALENDAR ENTRIES
// ==============================================================================

/// A booked slot as the remote authority stores it.
///
/// `appointment_time` is kept verbatim: snapshot rows come from the remote
/// and are only interpreted when a constraint needs the instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(deserialize_with = "flexible_id")]
    pub doctor_id: i64,
    #[serde(deserialize_with = "flexible_id")]
    pub person_id: i64,
    pub appointment_time: String,
    #[serde(default)]
    pub is_new_patient_appointment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
}

impl Appointment {
    /// Binds `request` to `doctor_id` at `time`.
    pub fn booked(request: &AppointmentRequest, doctor_id: i64, time: DateTime<Utc>) -> Self {
        Self {
            doctor_id,
            person_id: request.person_id,
            appointment_time: format_appointment_time(time),
            is_new_patient_appointment: request.is_new,
            request_id: Some(request.request_id),
        }
    }

    /// The instant this appointment occupies, or `None` if the stored
    /// timestamp is unreadable. Offset-less timestamps are read as UTC.
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.appointment_time.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// `2025-06-02T10:00:00.000Z`
pub fn format_appointment_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ==============================================================================
// INCOMING REQUESTS
// ==============================================================================

/// A pending request pulled from the remote queue. Both preference lists
/// are ordered by precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    #[serde(deserialize_with = "flexible_id")]
    pub request_id: i64,
    #[serde(deserialize_with = "flexible_id")]
    pub person_id: i64,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub preferred_days: Vec<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_ids")]
    pub preferred_docs: Vec<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_id<E: de::Error>(self) -> Result<i64, E> {
        match self {
            RawId::Number(id) => Ok(id),
            RawId::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid identifier: {:?}", text))),
        }
    }
}

fn flexible_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?.into_id()
}

fn flexible_ids<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawId>::deserialize(deserializer)?
        .into_iter()
        .map(RawId::into_id)
        .collect()
}
