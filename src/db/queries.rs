use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Appointments ──

pub fn find_appointments_by_slot(
    conn: &Connection,
    date: NaiveDate,
    time: &str,
) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, mobile, date, time, status, created_at
         FROM appointments WHERE date = ?1 AND time = ?2 ORDER BY created_at ASC",
    )?;

    let rows = stmt.query_map(params![date.format(DATE_FORMAT).to_string(), time], |row| {
        Ok(parse_appointment_row(row))
    })?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn get_booked_times(conn: &Connection, date: NaiveDate) -> anyhow::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT time FROM appointments WHERE date = ?1")?;

    let rows = stmt.query_map(params![date.format(DATE_FORMAT).to_string()], |row| {
        row.get::<_, String>(0)
    })?;

    let mut times = vec![];
    for row in rows {
        times.push(row?);
    }
    Ok(times)
}

/// Inserts the booking only if nothing holds the same (date, time) yet.
/// Check and write are one statement, so two requests cannot both land.
/// Returns `false` when the slot was already taken.
pub fn insert_appointment_if_free(conn: &Connection, booking: &Booking) -> anyhow::Result<bool> {
    let date = booking.date.format(DATE_FORMAT).to_string();
    let created_at = booking.created_at.format(TIMESTAMP_FORMAT).to_string();

    let count = conn.execute(
        "INSERT INTO appointments (id, name, mobile, date, time, status, created_at)
         SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7
         WHERE NOT EXISTS (SELECT 1 FROM appointments WHERE date = ?4 AND time = ?5)",
        params![
            booking.id,
            booking.name,
            booking.mobile,
            date,
            booking.time,
            booking.status.as_str(),
            created_at,
        ],
    )?;
    Ok(count > 0)
}

fn parse_appointment_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let mobile: String = row.get(2)?;
    let date_str: String = row.get(3)?;
    let time: String = row.get(4)?;
    let status_str: String = row.get(5)?;
    let created_at_str: String = row.get(6)?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)?;
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Booking {
        id,
        name,
        mobile,
        date,
        time,
        status: BookingStatus::parse(&status_str),
        created_at,
    })
}
