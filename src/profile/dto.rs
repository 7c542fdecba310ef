use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::bmi::BmiCategory;
use super::model::Objective;
use crate::auth::repo_types::StoredUser;

/// Profile as returned to clients; BMI is computed on the way out.
#[derive(Debug, Serialize)]
pub struct PublicProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub objective: Objective,
    pub body_fat_percent: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
}

impl From<&StoredUser> for PublicProfile {
    fn from(u: &StoredUser) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            weight_kg: u.profile.weight_kg,
            height_m: u.profile.height_m,
            bmi: u.profile.bmi(),
            bmi_category: u.profile.bmi_category(),
            objective: u.profile.objective,
            body_fat_percent: u.profile.body_fat_percent,
            muscle_mass_kg: u.profile.muscle_mass_kg,
            registered_at: u.registered_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BmiQuery {
    #[serde(default)]
    pub weight_kg: String,
    #[serde(default)]
    pub height_m: String,
}

/// Live BMI badge; both fields are null while the inputs are incomplete.
#[derive(Debug, Serialize)]
pub struct BmiPreview {
    pub bmi: Option<f64>,
    pub category: Option<BmiCategory>,
}
