use std::env;
use tracing::warn;

pub const DEFAULT_SCHEDULING_API_URL: &str = "https://scheduling.interviews.brevium.com/api/Scheduling";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scheduling_api_url: String,
    pub scheduling_api_token: String,
    pub stop_on_completion: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            scheduling_api_url: env::var("SCHEDULING_API_URL")
                .unwrap_or_else(|_| {
                    warn!("SCHEDULING_API_URL not set, using default");
                    DEFAULT_SCHEDULING_API_URL.to_string()
                }),
            scheduling_api_token: env::var("SCHEDULING_API_TOKEN")
                .or_else(|_| env::var("BREVIUM_KEY"))
                .unwrap_or_else(|_| {
                    warn!("SCHEDULING_API_TOKEN not set, using empty value");
                    String::new()
                }),
            stop_on_completion: env::var("SCHEDULING_STOP_ON_COMPLETION")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        };

        if !config.is_configured() {
            warn!("Scheduler not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.scheduling_api_url.is_empty()
            && !self.scheduling_api_token.is_empty()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
