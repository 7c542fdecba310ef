use std::fmt;

use serde::{Deserialize, Serialize};

use super::bmi::{classify_bmi, compute_bmi, BmiCategory};

/// Declared dietary goal of a user, restaurant or menu item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    #[serde(alias = "emagrecimento")]
    WeightLoss,
    #[serde(alias = "ganho_massa")]
    MuscleGain,
    #[serde(alias = "ambos")]
    Both,
}

impl Objective {
    /// Parses a raw form value; accepts the wire names and the legacy labels.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "weight_loss" | "emagrecimento" => Some(Self::WeightLoss),
            "muscle_gain" | "ganho_massa" => Some(Self::MuscleGain),
            "both" | "ambos" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight loss",
            Self::MuscleGain => "Muscle gain",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body measurements and goal captured at registration.
///
/// BMI is not a field: it is always derived from the current weight and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub weight_kg: f64,
    pub height_m: f64,
    pub objective: Objective,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
}

impl UserProfile {
    pub fn new(weight_kg: f64, height_m: f64, objective: Objective) -> Self {
        Self {
            weight_kg,
            height_m,
            objective,
            body_fat_percent: None,
            muscle_mass_kg: None,
        }
    }

    pub fn bmi(&self) -> Option<f64> {
        compute_bmi(self.weight_kg, self.height_m)
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(classify_bmi)
    }
}
