//! HTTP surface for the reservable-dates pipeline.
//!
//! `POST /reservable_dates` takes `shift_start_date`, `due_date` and
//! `due_date_rule` as JSON and answers `{"dates": [...]}` or, with status
//! 400, `{"errors": [...]}`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::CorsError;
pub use router::{create_router, CorsOrigins};
pub use state::AppState;
