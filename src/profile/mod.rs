pub mod bmi;
pub mod dto;
pub mod handlers;
pub mod model;

pub use model::{Objective, UserProfile};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::bmi_routes())
        .merge(handlers::me_routes())
}
