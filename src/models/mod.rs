pub mod booking;
pub mod form;
pub mod slot;

pub use booking::{Booking, BookingDraft, BookingStatus, NewBooking};
pub use form::{AppointmentForm, DraftField, FormPhase, StatusKind, SubmissionStatus};
pub use slot::{SlotWindow, TimeSlot, TIME_SLOTS};
