pub mod dto;
pub mod handlers;
pub mod services;

pub use services::{Cart, CartLine};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::cart_routes())
}
