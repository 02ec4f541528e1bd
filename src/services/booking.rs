use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, Utc};

use crate::db::{AppointmentStore, InsertOutcome};
use crate::models::{AppointmentForm, Booking, BookingDraft, NewBooking, TimeSlot};
use crate::services::notify::{Notification, NotificationRelay};
use crate::services::validation::{self, ValidationError};

pub const BOOKED_MESSAGE: &str =
    "Appointment booked successfully! We will contact you soon to confirm.";

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("This time slot is already booked. Please choose another time.")]
    SlotUnavailable,

    #[error("Your appointment request is already being submitted.")]
    InProgress,

    #[error("failed to save booking: {0:#}")]
    Persistence(anyhow::Error),
}

impl BookingError {
    /// Text shown to the patient. Storage failures never leak their cause.
    pub fn user_message(&self) -> String {
        match self {
            BookingError::Persistence(_) => {
                "Failed to book appointment. Please try again or call us directly.".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result of one pass through the booking flow: the form in its new state
/// plus the outcome that put it there.
#[derive(Debug)]
pub struct Submission {
    pub form: AppointmentForm,
    pub outcome: Result<Booking, BookingError>,
}

pub struct BookingService {
    store: Arc<dyn AppointmentStore>,
    relay: Arc<dyn NotificationRelay>,
    clinic_name: String,
    utc_offset: FixedOffset,
}

impl BookingService {
    pub fn new(
        store: Arc<dyn AppointmentStore>,
        relay: Arc<dyn NotificationRelay>,
        clinic_name: String,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            store,
            relay,
            clinic_name,
            utc_offset,
        }
    }

    /// Today's date at the clinic.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset).date_naive()
    }

    /// True when nothing is booked at (date, slot). A failed lookup counts as
    /// available so the patient is never blocked by a storage hiccup; the
    /// guarded insert still refuses a slot that turns out to be taken.
    pub async fn check_availability(&self, date: NaiveDate, slot: &TimeSlot) -> bool {
        match self.store.find_by_slot(date, slot.label).await {
            Ok(existing) => existing.is_empty(),
            Err(e) => {
                tracing::warn!(error = %e, %date, time = slot.label, "availability check failed, assuming free");
                true
            }
        }
    }

    /// Labels already taken on `date`. Lookup failures show every slot as free.
    pub async fn booked_labels(&self, date: NaiveDate) -> Vec<String> {
        self.store.booked_times(date).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, %date, "failed to load booked slots");
            Vec::new()
        })
    }

    pub async fn persist(&self, new: &NewBooking) -> Result<Booking, BookingError> {
        let booking = Booking::pending(new);
        match self.store.insert_if_free(&booking).await {
            Ok(InsertOutcome::Inserted) => {
                tracing::info!(id = %booking.id, date = %booking.date, time = %booking.time, "booking saved");
                Ok(booking)
            }
            Ok(InsertOutcome::SlotTaken) => {
                tracing::info!(date = %booking.date, time = %booking.time, "slot taken at insert");
                Err(BookingError::SlotUnavailable)
            }
            Err(e) => Err(BookingError::Persistence(e)),
        }
    }

    /// Sends the staff notification in the background. The booking is
    /// already stored, so a relay failure is only logged.
    pub fn notify(&self, booking: &Booking) -> tokio::task::JoinHandle<()> {
        let relay = Arc::clone(&self.relay);
        let notification = Notification::for_booking(booking, &self.clinic_name);
        let id = booking.id.clone();

        tokio::spawn(async move {
            match relay.send(&notification).await {
                Ok(()) => tracing::info!(%id, "booking notification sent"),
                Err(e) => tracing::warn!(error = %e, %id, "booking notification failed"),
            }
        })
    }

    /// Validate, check the slot, store, then notify. Nothing runs after the
    /// first failing step.
    pub async fn book(&self, draft: &BookingDraft, today: NaiveDate) -> Result<Booking, BookingError> {
        let new = validation::validate(draft, today)?;

        if !self.check_availability(new.date, new.slot).await {
            return Err(BookingError::SlotUnavailable);
        }

        let booking = self.persist(&new).await?;
        self.notify(&booking);
        Ok(booking)
    }

    pub async fn submit(&self, form: AppointmentForm) -> Submission {
        self.submit_on(form, self.today()).await
    }

    pub async fn submit_on(&self, form: AppointmentForm, today: NaiveDate) -> Submission {
        let form = match form.begin_submit() {
            Ok(form) => form,
            Err(form) => {
                return Submission {
                    form,
                    outcome: Err(BookingError::InProgress),
                }
            }
        };

        let outcome = self.book(&form.draft, today).await;
        let form = match &outcome {
            Ok(_) => form.succeed(BOOKED_MESSAGE),
            Err(e) => {
                match e {
                    BookingError::Persistence(cause) => {
                        tracing::error!(error = %cause, "failed to book appointment")
                    }
                    other => tracing::info!(reason = %other, "appointment request rejected"),
                }
                form.fail(e.user_message())
            }
        };

        Submission { form, outcome }
    }
}
