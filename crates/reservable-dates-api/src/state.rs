use std::sync::Arc;

use reservable_dates_core::service::ReservableDatesService;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReservableDatesService>,
}

impl AppState {
    pub fn new(service: ReservableDatesService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
