use std::ops::RangeInclusive;

use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::dto::RegisterRequest;
use crate::error::ValidationErrors;
use crate::profile::{bmi::parse_positive, Objective, UserProfile};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A registration that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile: UserProfile,
}

/// Checks every field of the form and reports all problems at once.
/// Accepted body-fat readings, both ends inclusive.
const BODY_FAT_PERCENT: RangeInclusive<f64> = 0.0..=100.0;

pub fn validate_registration(
    req: &RegisterRequest,
    min_password_len: usize,
) -> Result<NewRegistration, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = req.name.trim();
    if name.is_empty() {
        errors.add("name", "Name is required");
    }

    let email = normalize_email(&req.email);
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(&email) {
        errors.add("email", "Invalid email");
    }

    if req.password.trim().is_empty() {
        errors.add("password", "Password is required");
    } else if req.password.chars().count() < min_password_len {
        errors.add(
            "password",
            format!("Password must be at least {min_password_len} characters"),
        );
    }

    let weight_kg = required_positive(&mut errors, "weight_kg", &req.weight_kg, "Weight");
    let height_m = required_positive(&mut errors, "height_m", &req.height_m, "Height");

    let objective = if req.objective.trim().is_empty() {
        errors.add("objective", "Objective is required");
        None
    } else {
        let parsed = Objective::parse(&req.objective);
        if parsed.is_none() {
            errors.add("objective", "Unknown objective");
        }
        parsed
    };

    let (body_fat_percent, muscle_mass_kg) = if req.use_bioimpedance {
        (
            optional_in_range(
                &mut errors,
                "body_fat_percent",
                &req.body_fat_percent,
                "Body fat must be a number between 0 and 100",
                |v| BODY_FAT_PERCENT.contains(&v),
            ),
            optional_in_range(
                &mut errors,
                "muscle_mass_kg",
                &req.muscle_mass_kg,
                "Muscle mass must be a valid number",
                |v| v > 0.0,
            ),
        )
    } else {
        (None, None)
    };

    match (weight_kg, height_m, objective) {
        (Some(weight_kg), Some(height_m), Some(objective)) if errors.is_empty() => {
            Ok(NewRegistration {
                name: name.to_owned(),
                email,
                password: req.password.clone(),
                profile: UserProfile {
                    weight_kg,
                    height_m,
                    objective,
                    body_fat_percent,
                    muscle_mass_kg,
                },
            })
        }
        _ => Err(errors),
    }
}

fn required_positive(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    label: &str,
) -> Option<f64> {
    if raw.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
        return None;
    }
    let parsed = parse_positive(raw);
    if parsed.is_none() {
        errors.add(field, format!("{label} must be a valid number"));
    }
    parsed
}

fn optional_in_range(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    message: &str,
    accept: impl Fn(f64) -> bool,
) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && accept(v) => Some(v),
        _ => {
            errors.add(field, message);
            None
        }
    }
}
