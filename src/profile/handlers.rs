use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use super::bmi::{classify_bmi, compute_bmi_from_input};
use super::dto::{BmiPreview, BmiQuery, PublicProfile};
use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn bmi_routes() -> Router<AppState> {
    Router::new().route("/bmi", get(preview_bmi))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument]
pub async fn preview_bmi(Query(q): Query<BmiQuery>) -> Json<BmiPreview> {
    let bmi = compute_bmi_from_input(&q.weight_kg, &q.height_m);
    debug!(?bmi, "bmi preview");
    Json(BmiPreview {
        bmi,
        category: bmi.map(classify_bmi),
    })
}

#[instrument(skip(state))]
pub async fn get_me(State(state): State<AppState>) -> ApiResult<Json<PublicProfile>> {
    let user = state
        .profiles
        .load()
        .await?
        .ok_or(ApiError::NotFound("Profile not found"))?;
    Ok(Json(PublicProfile::from(&user)))
}
