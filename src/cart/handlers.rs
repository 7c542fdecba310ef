use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::dto::{CartOp, CartRequest, CartResponse};
use super::services::Cart;
use crate::{
    error::{ApiError, ApiResult},
    extract::ApiJson,
    state::AppState,
};

pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/restaurants/:id/cart", post(quote_cart))
}

/// Replays the client's cart operations and prices the result against the
/// restaurant's menu. Nothing is stored.
#[instrument(skip(state, body))]
pub async fn quote_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<CartRequest>,
) -> ApiResult<Json<CartResponse>> {
    let Some(restaurant) = state.catalog.find(&id) else {
        warn!(%id, "cart for unknown restaurant");
        return Err(ApiError::NotFound("Restaurant not found"));
    };

    let mut cart = Cart::from_quantities(body.items);
    for op in &body.ops {
        match op {
            CartOp::Add(item_id) => cart.add_item(item_id),
            CartOp::Remove(item_id) => cart.remove_item(item_id),
        }
    }

    let subtotal = cart.total(&restaurant.menu);
    let total = cart.order_total(&restaurant.menu, restaurant.delivery_fee);
    info!(restaurant_id = %restaurant.id, %subtotal, %total, "cart priced");

    Ok(Json(CartResponse {
        restaurant_id: restaurant.id.clone(),
        lines: cart.lines(&restaurant.menu),
        items: cart,
        subtotal,
        delivery_fee: restaurant.delivery_fee,
        total,
    }))
}
