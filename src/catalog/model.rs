use serde::Serialize;

use crate::money::Money;
use crate::profile::Objective;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub calories: u32,
    pub protein_grams: u32,
    pub carb_grams: u32,
    pub fat_grams: u32,
    pub category: String,
    pub objective: Objective,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub objective: Objective,
    pub rating: f32,
    pub delivery_time_range: String,
    pub delivery_fee: Money,
    pub specialties: Vec<String>,
    pub address: String,
    pub phone: String,
    pub opening_hours: String,
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Distinct menu categories in menu order, one per tab on the detail page.
    pub fn menu_categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for item in &self.menu {
            if !out.contains(&item.category.as_str()) {
                out.push(&item.category);
            }
        }
        out
    }
}

/// Read-only reference list of restaurants, in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn find(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.restaurants {
            if !out.iter().any(|c| c.eq_ignore_ascii_case(&r.category)) {
                out.push(&r.category);
            }
        }
        out
    }
}
