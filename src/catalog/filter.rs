//! Restaurant list filtering.
//!
//! A query becomes an ordered list of [`Stage`]s. Each stage only sees the
//! restaurants that survived the previous one, and the relative order of the
//! input is never changed.

use crate::profile::{Objective, UserProfile};

use super::model::Restaurant;

/// Category filter values that disable the category stage.
const ALL_CATEGORIES: [&str; 2] = ["all", "todos"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Keep restaurants tagged with the user's objective or with `Both`.
    Objective(Objective),
    /// Lowercased, trimmed search term matched against name, description and specialties.
    Search(String),
    /// Lowercased category compared for equality.
    Category(String),
}

impl Stage {
    pub fn keeps(&self, restaurant: &Restaurant) -> bool {
        match self {
            Self::Objective(wanted) => matches_objective(restaurant.objective, *wanted),
            Self::Search(term) => {
                contains_ci(&restaurant.name, term)
                    || contains_ci(&restaurant.description, term)
                    || restaurant.specialties.iter().any(|s| contains_ci(s, term))
            }
            Self::Category(category) => restaurant.category.to_lowercase() == *category,
        }
    }
}

/// A restaurant tagged `Both` matches any user objective. A user objective of
/// `Both` only matches restaurants tagged `Both`.
pub fn matches_objective(restaurant: Objective, user: Objective) -> bool {
    match (restaurant, user) {
        (Objective::Both, _) => true,
        (Objective::WeightLoss, Objective::WeightLoss) => true,
        (Objective::MuscleGain, Objective::MuscleGain) => true,
        (Objective::WeightLoss | Objective::MuscleGain, _) => false,
    }
}

/// Builds the stages for a query, skipping the ones whose input is absent.
pub fn stages(profile: Option<&UserProfile>, search_term: &str, category_filter: &str) -> Vec<Stage> {
    let mut out = Vec::with_capacity(3);
    if let Some(profile) = profile {
        out.push(Stage::Objective(profile.objective));
    }
    let term = search_term.trim();
    if !term.is_empty() {
        out.push(Stage::Search(term.to_lowercase()));
    }
    let category = category_filter.trim().to_lowercase();
    if !category.is_empty() && !ALL_CATEGORIES.contains(&category.as_str()) {
        out.push(Stage::Category(category));
    }
    out
}

/// Applies `stages` in order.
pub fn apply_stages<'r>(restaurants: &'r [Restaurant], stages: &[Stage]) -> Vec<&'r Restaurant> {
    let all: Vec<&'r Restaurant> = restaurants.iter().collect();
    stages.iter().fold(all, |surviving, stage| {
        surviving.into_iter().filter(|r| stage.keeps(r)).collect()
    })
}

pub fn filter_catalog<'r>(
    restaurants: &'r [Restaurant],
    profile: Option<&UserProfile>,
    search_term: &str,
    category_filter: &str,
) -> Vec<&'r Restaurant> {
    apply_stages(restaurants, &stages(profile, search_term, category_filter))
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(list: &[&Restaurant]) -> Vec<String> {
        list.iter().map(|r| r.id.clone()).collect()
    }

    fn profile(objective: Objective) -> UserProfile {
        UserProfile::new(70.0, 1.75, objective)
    }

    #[test]
    fn no_profile_no_filters_returns_everything_in_order() {
        let catalog = Catalog::builtin();
        let out = filter_catalog(catalog.restaurants(), None, "", "all");
        assert_eq!(ids(&out), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn objective_narrowing_keeps_matching_and_both() {
        let catalog = Catalog::builtin();
        let p = profile(Objective::WeightLoss);
        let out = filter_catalog(catalog.restaurants(), Some(&p), "", "all");
        assert_eq!(ids(&out), vec!["1", "3", "4", "6"]);
    }

    #[test]
    fn muscle_gain_never_sees_weight_loss_restaurants() {
        let catalog = Catalog::builtin();
        let p = profile(Objective::MuscleGain);
        for term in ["", "fit", "low carb", "protein", "a"] {
            for category in ["all", "Healthy Food", "Sports", "varied"] {
                let out = filter_catalog(catalog.restaurants(), Some(&p), term, category);
                assert!(out.iter().all(|r| r.objective != Objective::WeightLoss));
            }
        }
    }

    #[test]
    fn both_user_objective_only_matches_both_restaurants() {
        let catalog = Catalog::builtin();
        let p = profile(Objective::Both);
        let out = filter_catalog(catalog.restaurants(), Some(&p), "", "all");
        assert_eq!(ids(&out), vec!["3", "6"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = Catalog::builtin();
        let p = profile(Objective::WeightLoss);
        let first = filter_catalog(catalog.restaurants(), Some(&p), "", "all");
        let owned: Vec<Restaurant> = first.iter().map(|r| (*r).clone()).collect();
        let second = filter_catalog(&owned, Some(&p), "", "all");
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(ids(&first), ids(&filter_catalog(catalog.restaurants(), Some(&p), "", "all")));
    }

    #[test]
    fn search_is_case_insensitive_over_specialties() {
        let catalog = Catalog::builtin();
        let lower = filter_catalog(catalog.restaurants(), None, "low carb", "all");
        let upper = filter_catalog(catalog.restaurants(), None, "  LOW CARB ", "all");
        assert_eq!(ids(&lower), vec!["1"]);
        assert_eq!(ids(&lower), ids(&upper));

        let vegan = filter_catalog(catalog.restaurants(), None, "SUPERFOODS", "all");
        assert_eq!(ids(&vegan), vec!["3"]);
    }

    #[test]
    fn search_matches_name_and_description() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(&filter_catalog(catalog.restaurants(), None, "bistro", "all")), vec!["6"]);
        assert_eq!(
            ids(&filter_catalog(catalog.restaurants(), None, "athletes", "all")),
            vec!["5"]
        );
    }

    #[test]
    fn unmatched_search_returns_empty() {
        let catalog = Catalog::builtin();
        assert!(filter_catalog(catalog.restaurants(), None, "xyz-nonexistent", "all").is_empty());
    }

    #[test]
    fn category_is_exact_and_case_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(
            ids(&filter_catalog(catalog.restaurants(), None, "", "vegan/vegetarian")),
            vec!["3"]
        );
        // substring of a category does not match
        assert!(filter_catalog(catalog.restaurants(), None, "", "vegan").is_empty());
        assert_eq!(filter_catalog(catalog.restaurants(), None, "", "TODOS").len(), 6);
        assert_eq!(filter_catalog(catalog.restaurants(), None, "", "").len(), 6);
    }

    #[test]
    fn category_applies_after_objective_narrowing() {
        let catalog = Catalog::builtin();
        let p = profile(Objective::WeightLoss);
        assert!(filter_catalog(catalog.restaurants(), Some(&p), "", "Sports").is_empty());
        assert_eq!(
            ids(&filter_catalog(catalog.restaurants(), Some(&p), "", "fit meal boxes")),
            vec!["4"]
        );
    }

    #[test]
    fn stages_are_built_in_fixed_order() {
        let p = profile(Objective::MuscleGain);
        assert_eq!(
            stages(Some(&p), " Protein ", "Sports"),
            vec![
                Stage::Objective(Objective::MuscleGain),
                Stage::Search("protein".into()),
                Stage::Category("sports".into()),
            ]
        );
        assert!(stages(None, "   ", "all").is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(filter_catalog(&[], None, "fit", "all").is_empty());
    }
}
