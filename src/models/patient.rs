//! Patient record types for heart disease risk prediction.
//!
//! Eleven clinical indicators matching the Heart Failure Prediction dataset
//! (Kaggle, 918 records) the pipeline artifact was fitted on.

use serde::{Deserialize, Serialize};

/// Number of features the pipeline consumes.
pub const FEATURE_COUNT: usize = 11;

/// Feature names in pipeline order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age",
    "Sex",
    "ChestPainType",
    "RestingBP",
    "Cholesterol",
    "FastingBS",
    "RestingECG",
    "MaxHR",
    "ExerciseAngina",
    "Oldpeak",
    "ST_Slope",
];

/// Biological sex. Wire form matches the dataset column (`M`/`F`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    /// Numeric code the pipeline was fitted with: F = 0, M = 1.
    pub fn code(&self) -> f64 {
        match self {
            Sex::Female => 0.0,
            Sex::Male => 1.0,
        }
    }
}

/// Chest pain classification. Wire forms match the dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestPainType {
    #[serde(rename = "TA")]
    TypicalAngina,
    #[serde(rename = "ATA")]
    AtypicalAngina,
    #[serde(rename = "NAP")]
    NonAnginalPain,
    #[serde(rename = "ASY")]
    Asymptomatic,
}

impl ChestPainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChestPainType::TypicalAngina => "TA",
            ChestPainType::AtypicalAngina => "ATA",
            ChestPainType::NonAnginalPain => "NAP",
            ChestPainType::Asymptomatic => "ASY",
        }
    }

    /// Ordinal code the pipeline was fitted with: TA = 0, ATA = 1,
    /// NAP = 2, ASY = 3.
    pub fn code(&self) -> f64 {
        match self {
            ChestPainType::TypicalAngina => 0.0,
            ChestPainType::AtypicalAngina => 1.0,
            ChestPainType::NonAnginalPain => 2.0,
            ChestPainType::Asymptomatic => 3.0,
        }
    }
}

/// Resting electrocardiogram result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestingEcg {
    #[serde(rename = "Normal")]
    Normal,
    /// ST-T wave abnormality.
    #[serde(rename = "ST")]
    StAbnormality,
    /// Left ventricular hypertrophy.
    #[serde(rename = "LVH")]
    Lvh,
}

impl RestingEcg {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestingEcg::Normal => "Normal",
            RestingEcg::StAbnormality => "ST",
            RestingEcg::Lvh => "LVH",
        }
    }

    /// Code the pipeline was fitted with: Normal = 0, ST = 1, LVH = 2.
    pub fn code(&self) -> f64 {
        match self {
            RestingEcg::Normal => 0.0,
            RestingEcg::StAbnormality => 1.0,
            RestingEcg::Lvh => 2.0,
        }
    }
}

/// Slope of the peak exercise ST segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StSlope {
    #[serde(rename = "Up")]
    Up,
    #[serde(rename = "Flat")]
    Flat,
    #[serde(rename = "Down")]
    Down,
}

impl StSlope {
    pub fn as_str(&self) -> &'static str {
        match self {
            StSlope::Up => "Up",
            StSlope::Flat => "Flat",
            StSlope::Down => "Down",
        }
    }

    /// Code the pipeline was fitted with: Up = 0, Flat = 1, Down = 2.
    pub fn code(&self) -> f64 {
        match self {
            StSlope::Up => 0.0,
            StSlope::Flat => 1.0,
            StSlope::Down => 2.0,
        }
    }
}

/// One submitted set of patient measurements. Immutable once built; the
/// submitting surface enforces that every field is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Age in years (0-120; dataset covers 28-77).
    #[serde(rename = "Age")]
    pub age: i32,

    #[serde(rename = "Sex")]
    pub sex: Sex,

    #[serde(rename = "ChestPainType")]
    pub chest_pain_type: ChestPainType,

    /// Resting blood pressure in mm Hg (0-300).
    #[serde(rename = "RestingBP")]
    pub resting_bp: i32,

    /// Serum cholesterol in mg/dl (0-600). A value of 0 is the dataset's
    /// sentinel for a missing measurement, not a clinical reading.
    #[serde(rename = "Cholesterol")]
    pub cholesterol: i32,

    /// Fasting blood sugar above 120 mg/dl.
    #[serde(rename = "FastingBS")]
    pub fasting_bs: bool,

    #[serde(rename = "RestingECG")]
    pub resting_ecg: RestingEcg,

    /// Maximum heart rate achieved, beats per minute (60-205).
    #[serde(rename = "MaxHR")]
    pub max_hr: i32,

    /// Exercise-induced angina.
    #[serde(rename = "ExerciseAngina")]
    pub exercise_angina: bool,

    /// ST depression induced by exercise relative to rest (-3.0-7.0).
    #[serde(rename = "Oldpeak")]
    pub oldpeak: f64,

    #[serde(rename = "ST_Slope")]
    pub st_slope: StSlope,
}

impl PatientRecord {
    /// Encode the record into the pipeline's feature vector.
    /// Order matches [`FEATURE_NAMES`]; categoricals go through the
    /// documented per-enum codes.
    pub fn to_feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.age),
            self.sex.code(),
            self.chest_pain_type.code(),
            f64::from(self.resting_bp),
            f64::from(self.cholesterol),
            if self.fasting_bs { 1.0 } else { 0.0 },
            self.resting_ecg.code(),
            f64::from(self.max_hr),
            if self.exercise_angina { 1.0 } else { 0.0 },
            self.oldpeak,
            self.st_slope.code(),
        ]
    }

    /// Validate that every numeric field is inside its selectable domain.
    ///
    /// The domains are the wide dataset domains, not the narrower input
    /// widget sub-ranges. Cholesterol 0 is accepted as the missing-data
    /// sentinel.
    ///
    /// # Errors
    /// Returns every violation found, one message per field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(0..=120).contains(&self.age) {
            errors.push(format!("Age {} out of range [0, 120]", self.age));
        }
        if !(0..=300).contains(&self.resting_bp) {
            errors.push(format!(
                "RestingBP {} out of range [0, 300]",
                self.resting_bp
            ));
        }
        if !(0..=600).contains(&self.cholesterol) {
            errors.push(format!(
                "Cholesterol {} out of range [0, 600]",
                self.cholesterol
            ));
        }
        if !(60..=205).contains(&self.max_hr) {
            errors.push(format!("MaxHR {} out of range [60, 205]", self.max_hr));
        }
        if !(-3.0..=7.0).contains(&self.oldpeak) {
            errors.push(format!("Oldpeak {} out of range [-3.0, 7.0]", self.oldpeak));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PatientRecord {
        PatientRecord {
            age: 58,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::AtypicalAngina,
            resting_bp: 130,
            cholesterol: 240,
            fasting_bs: false,
            resting_ecg: RestingEcg::Normal,
            max_hr: 150,
            exercise_angina: false,
            oldpeak: 1.0,
            st_slope: StSlope::Up,
        }
    }

    #[test]
    fn feature_vector_matches_pipeline_order() {
        let v = record().to_feature_vector();
        assert_eq!(v.len(), FEATURE_COUNT);
        assert!((v[0] - 58.0).abs() < f64::EPSILON); // Age
        assert!((v[1] - 1.0).abs() < f64::EPSILON); // Sex = M
        assert!((v[2] - 1.0).abs() < f64::EPSILON); // ChestPainType = ATA
        assert!((v[10] - 0.0).abs() < f64::EPSILON); // ST_Slope = Up
    }

    #[test]
    fn cholesterol_sentinel_passes_validation() {
        let mut r = record();
        r.cholesterol = 0;
        assert!(r.validate().is_ok());
    }

    #[test]
    fn out_of_domain_fields_are_all_reported() {
        let mut r = record();
        r.age = 150;
        r.max_hr = 20;
        let errors = r.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn wire_form_matches_dataset_strings() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["Sex"], "M");
        assert_eq!(json["ChestPainType"], "ATA");
        assert_eq!(json["ST_Slope"], "Up");
    }

    #[test]
    fn unknown_category_is_rejected_at_deserialization() {
        let result = serde_json::from_value::<Sex>(serde_json::json!("Laki-laki"));
        assert!(result.is_err());
    }
}
