use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use reservable_dates_core::request::RawShiftRequest;
use tracing::{info, warn};

use crate::dto::{HealthResponse, ReservableDatesResponse};
use crate::error::AppError;
use crate::state::AppState;

pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /reservable_dates
///
/// Validates the three fields and returns the weekdays that fall inside both
/// the reservable window and the target shift cycle.
pub async fn reservable_dates(
    State(state): State<AppState>,
    payload: Result<Json<RawShiftRequest>, JsonRejection>,
) -> HandlerResult<ReservableDatesResponse> {
    let Json(raw) = payload.inspect_err(|e| warn!("rejected request body: {e}"))?;

    match state.service.reservable_dates(&raw) {
        Ok(dates) => {
            info!(count = dates.len(), "computed reservable dates");
            Ok(Json(ReservableDatesResponse { dates }))
        }
        Err(errors) => {
            warn!("rejected request: {errors}");
            Err(errors.into())
        }
    }
}
