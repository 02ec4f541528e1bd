use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::Connection;

use super::queries;
use crate::models::Booking;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    SlotTaken,
}

/// The booking collection: equality lookups on (date, time) and guarded
/// inserts.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn find_by_slot(&self, date: NaiveDate, time: &str) -> anyhow::Result<Vec<Booking>>;

    async fn booked_times(&self, date: NaiveDate) -> anyhow::Result<Vec<String>>;

    async fn insert_if_free(&self, booking: &Booking) -> anyhow::Result<InsertOutcome>;
}

pub struct SqliteAppointmentStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteAppointmentStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    fn conn(&self) -> anyhow::Result<MutexGuard<'_, Connection>> {
        self.db
            .lock()
            .map_err(|_| anyhow::anyhow!("database connection lock poisoned"))
    }
}

#[async_trait]
impl AppointmentStore for SqliteAppointmentStore {
    async fn find_by_slot(&self, date: NaiveDate, time: &str) -> anyhow::Result<Vec<Booking>> {
        let conn = self.conn()?;
        queries::find_appointments_by_slot(&conn, date, time)
    }

    async fn booked_times(&self, date: NaiveDate) -> anyhow::Result<Vec<String>> {
        let conn = self.conn()?;
        queries::get_booked_times(&conn, date)
    }

    async fn insert_if_free(&self, booking: &Booking) -> anyhow::Result<InsertOutcome> {
        let conn = self.conn()?;
        if queries::insert_appointment_if_free(&conn, booking)? {
            Ok(InsertOutcome::Inserted)
        } else {
            Ok(InsertOutcome::SlotTaken)
        }
    }
}
