use serde::{Deserialize, Deserializer};

/// Registration form as typed by the user. Numeric fields stay raw so that
/// validation can report them per field instead of rejecting the body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(deserialize_with = "raw_input")]
    pub weight_kg: String,
    #[serde(deserialize_with = "raw_input")]
    pub height_m: String,
    pub objective: String,
    pub use_bioimpedance: bool,
    #[serde(deserialize_with = "raw_input")]
    pub body_fat_percent: String,
    #[serde(deserialize_with = "raw_input")]
    pub muscle_mass_kg: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Accepts a string, a JSON number or null and keeps the textual form.
pub fn raw_input<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
