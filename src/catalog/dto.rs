use serde::{Deserialize, Serialize};

use super::model::Restaurant;
use crate::money::Money;
use crate::profile::Objective;

/// Restaurant as shown in the list view (no menu or contact details).
#[derive(Debug, Serialize)]
pub struct RestaurantListItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub objective: Objective,
    pub rating: f32,
    pub delivery_time_range: String,
    pub delivery_fee: Money,
    pub specialties: Vec<String>,
}

impl From<&Restaurant> for RestaurantListItem {
    fn from(r: &Restaurant) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone(),
            description: r.description.clone(),
            category: r.category.clone(),
            objective: r.objective,
            rating: r.rating,
            delivery_time_range: r.delivery_time_range.clone(),
            delivery_fee: r.delivery_fee,
            specialties: r.specialties.clone(),
        }
    }
}

/// Detail view: the full record plus the menu tabs.
#[derive(Debug, Serialize)]
pub struct RestaurantDetails {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub menu_categories: Vec<String>,
}

impl From<&Restaurant> for RestaurantDetails {
    fn from(r: &Restaurant) -> Self {
        Self {
            menu_categories: r.menu_categories().into_iter().map(str::to_owned).collect(),
            restaurant: r.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RestaurantListResponse {
    /// Objective used for narrowing, absent when nobody is registered.
    pub recommended_for: Option<Objective>,
    pub count: usize,
    pub restaurants: Vec<RestaurantListItem>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "all".into()
}
