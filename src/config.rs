use std::env;

use chrono::FixedOffset;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Web3Forms access key. Empty means notifications are only logged.
    pub web3forms_access_key: String,
    pub web3forms_url: String,
    pub clinic_name: String,
    /// Offset of the clinic's local time from UTC, used to decide what "today" is.
    pub utc_offset_minutes: i32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "clinic.db".to_string()),
            web3forms_access_key: env::var("WEB3FORMS_ACCESS_KEY").unwrap_or_default(),
            web3forms_url: env::var("WEB3FORMS_URL")
                .unwrap_or_else(|_| "https://api.web3forms.com/submit".to_string()),
            clinic_name: env::var("CLINIC_NAME")
                .unwrap_or_else(|_| "Dr. Suraj Sharma Dental Clinic".to_string()),
            utc_offset_minutes: env::var("CLINIC_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(330),
        }
    }

    pub fn clinic_offset(&self) -> Result<FixedOffset, AppError> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            AppError::Config(format!(
                "CLINIC_UTC_OFFSET_MINUTES out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }
}
