use crate::services::booking::BookingService;

pub struct AppState {
    pub booking: BookingService,
}
