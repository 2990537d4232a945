pub mod authority;
pub mod client;

pub use authority::{CalendarLifecycle, Committer, RequestSource, SchedulingAuthority};
pub use client::SchedulingApiClient;
