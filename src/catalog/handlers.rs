use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument, warn};

use super::dto::{CatalogQuery, RestaurantDetails, RestaurantListItem, RestaurantListResponse};
use super::filter::filter_catalog;
use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id", get(get_restaurant))
        .route("/categories", get(list_categories))
}

#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(q): Query<CatalogQuery>,
) -> ApiResult<Json<RestaurantListResponse>> {
    // read once per request and pass it down by value
    let profile = state.profiles.load().await?.map(|u| u.profile);

    let restaurants: Vec<RestaurantListItem> =
        filter_catalog(state.catalog.restaurants(), profile.as_ref(), &q.search, &q.category)
            .into_iter()
            .map(RestaurantListItem::from)
            .collect();

    debug!(count = restaurants.len(), "restaurants filtered");
    Ok(Json(RestaurantListResponse {
        recommended_for: profile.map(|p| p.objective),
        count: restaurants.len(),
        restaurants,
    }))
}

#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RestaurantDetails>> {
    match state.catalog.find(&id) {
        Some(r) => Ok(Json(RestaurantDetails::from(r))),
        None => {
            warn!(%id, "restaurant not found");
            Err(ApiError::NotFound("Restaurant not found"))
        }
    }
}

#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .categories()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    )
}

#[cfg(test)]
mod catalog_handler_tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use time::OffsetDateTime;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::{
        app::build_app,
        auth::repo_types::StoredUser,
        profile::{Objective, UserProfile},
        state::AppState,
    };

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let res = build_app(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn ids(v: &Value) -> Vec<String> {
        v["restaurants"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn lists_full_catalog_without_profile() {
        let (status, body) = get_json(AppState::fake(), "/api/v1/restaurants").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 6);
        assert!(body["recommended_for"].is_null());
        assert!(body["restaurants"][0].get("menu").is_none());
    }

    #[tokio::test]
    async fn narrows_by_stored_profile_objective() {
        let state = AppState::fake();
        state
            .profiles
            .save(&StoredUser {
                id: Uuid::new_v4(),
                name: "Bruno".into(),
                email: "bruno@example.com".into(),
                password_hash: "unused".into(),
                profile: UserProfile::new(85.0, 1.80, Objective::MuscleGain),
                registered_at: OffsetDateTime::now_utc(),
            })
            .await
            .unwrap();

        let (status, body) = get_json(state, "/api/v1/restaurants?search=&category=all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommended_for"], "muscle_gain");
        assert_eq!(ids(&body), vec!["2", "3", "5", "6"]);
    }

    #[tokio::test]
    async fn search_and_category_come_from_query() {
        let (_, body) = get_json(AppState::fake(), "/api/v1/restaurants?search=LOW%20CARB").await;
        assert_eq!(ids(&body), vec!["1"]);

        let (_, body) =
            get_json(AppState::fake(), "/api/v1/restaurants?category=high%20protein").await;
        assert_eq!(ids(&body), vec!["2"]);

        let (_, body) =
            get_json(AppState::fake(), "/api/v1/restaurants?search=xyz-nonexistent").await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn restaurant_detail_includes_menu() {
        let (status, body) = get_json(AppState::fake(), "/api/v1/restaurants/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Muscle Food");
        assert_eq!(body["delivery_fee"], 4.5);
        assert_eq!(body["menu"].as_array().unwrap().len(), 2);
        assert_eq!(body["menu_categories"], serde_json::json!(["Main Courses", "Drinks"]));
    }

    #[tokio::test]
    async fn unknown_restaurant_is_not_found() {
        let (status, body) = get_json(AppState::fake(), "/api/v1/restaurants/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Restaurant not found");
    }

    #[tokio::test]
    async fn categories_endpoint_lists_distinct_categories() {
        let (status, body) = get_json(AppState::fake(), "/api/v1/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0], "Healthy Food");
    }
}
