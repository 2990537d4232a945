pub mod error;
pub mod scheduling;

pub use error::ApiError;
pub use scheduling::{Appointment, AppointmentRequest};
