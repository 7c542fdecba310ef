mod data;
pub mod dto;
pub mod filter;
pub mod handlers;
pub mod model;

pub use model::{Catalog, MenuItem, Restaurant};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::catalog_routes())
}
