use serde::Serialize;

/// Health category derived from a BMI value. Informational only.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Computes BMI rounded to two decimals, or `None` when either input is not a
/// finite number strictly greater than zero.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Option<f64> {
    if !is_positive(weight_kg) || !is_positive(height_m) {
        return None;
    }
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return None;
    }
    Some(round_half_up_2(bmi))
}

/// Same as [`compute_bmi`] over the raw field values typed by the user.
pub fn compute_bmi_from_input(weight_kg: &str, height_m: &str) -> Option<f64> {
    compute_bmi(parse_positive(weight_kg)?, parse_positive(height_m)?)
}

pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Parses a trimmed raw input as a finite number greater than zero.
pub fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| is_positive(*v))
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn round_half_up_2(v: f64) -> f64 {
    (v * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_and_rounds_to_two_decimals() {
        assert_eq!(compute_bmi(70.0, 1.75), Some(22.86));
        assert_eq!(compute_bmi(45.0, 1.60), Some(17.58));
    }

    #[test]
    fn non_positive_inputs_yield_none() {
        assert_eq!(compute_bmi(0.0, 1.75), None);
        assert_eq!(compute_bmi(70.0, 0.0), None);
        assert_eq!(compute_bmi(-70.0, 1.75), None);
        assert_eq!(compute_bmi(f64::NAN, 1.75), None);
        assert_eq!(compute_bmi(70.0, f64::INFINITY), None);
    }

    #[test]
    fn raw_input_is_trimmed_and_parsed() {
        assert_eq!(compute_bmi_from_input(" 70 ", "1.75"), Some(22.86));
        assert_eq!(compute_bmi_from_input("", "1.75"), None);
        assert_eq!(compute_bmi_from_input("70", "abc"), None);
        assert_eq!(compute_bmi_from_input("70", "0"), None);
    }

    #[test]
    fn classification_matches_ranges() {
        assert_eq!(classify_bmi(22.86), BmiCategory::Normal);
        assert_eq!(classify_bmi(17.58), BmiCategory::Underweight);
        assert_eq!(classify_bmi(27.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(41.2), BmiCategory::Obese);
    }

    #[test]
    fn boundaries_fall_into_the_upper_category() {
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(classify_bmi(29.99), BmiCategory::Overweight);
    }
}
