pub mod log;
pub mod web3forms;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::Booking;

/// What clinic staff receive for each new booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub subject: String,
    pub from_name: String,
    pub name: String,
    pub mobile: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl Notification {
    pub fn for_booking(booking: &Booking, clinic_name: &str) -> Self {
        let date = booking.date.format("%Y-%m-%d").to_string();
        let message = format!(
            "New appointment booking:\n\n\
             Name: {}\n\
             Mobile: {}\n\
             Date: {}\n\
             Time: {}\n\n\
             Please confirm the appointment with the patient.",
            booking.name, booking.mobile, date, booking.time
        );

        Self {
            subject: format!("New Appointment Booking - {clinic_name}"),
            from_name: format!("{clinic_name} Website"),
            name: booking.name.clone(),
            mobile: booking.mobile.clone(),
            date,
            time: booking.time.clone(),
            message,
        }
    }
}

#[async_trait]
pub trait NotificationRelay: Send + Sync {
    async fn send(&self, notification: &Notification) -> anyhow::Result<()>;
}
