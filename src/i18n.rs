//! Fixed user-facing string catalogs, Indonesian and English.

use serde::{Deserialize, Serialize};

use crate::models::RiskTier;

/// Supported display languages. Indonesian is the default, as in the
/// original surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Id,
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Id
    }
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }

    /// Parse a `lang` parameter. Unknown values fall back to the default
    /// locale: the language selector is a closed menu, so anything else is
    /// a caller bug rather than user input worth rejecting.
    pub fn from_param(lang: Option<&str>) -> Self {
        match lang {
            Some("en") => Locale::En,
            Some("id") | None => Locale::Id,
            Some(_) => Locale::default(),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        match self {
            Locale::Id => &CATALOG_ID,
            Locale::En => &CATALOG_EN,
        }
    }
}

/// One language's fixed strings. Pure data, no computation beyond the
/// `{score}` substitution in the interpretation templates.
pub struct Catalog {
    pub result_header: &'static str,
    pub risk_score_label: &'static str,
    pub risk_level_label: &'static str,
    pub recommendation_label: &'static str,

    pub result_low_risk: &'static str,
    pub result_medium_risk: &'static str,
    pub result_high_risk: &'static str,

    pub recommendation_low: &'static str,
    pub recommendation_medium: &'static str,
    pub recommendation_high: &'static str,

    pub no_disease: &'static str,
    pub disease: &'static str,
    pub risk_distribution: &'static str,

    pub interpretation_low: &'static str,
    pub interpretation_medium: &'static str,
    pub interpretation_high: &'static str,

    pub model_info_title: &'static str,
    pub dataset_overview_title: &'static str,
    pub total_samples_title: &'static str,
    pub features_title: &'static str,
    pub positive_cases_title: &'static str,
    pub healthy_cases_title: &'static str,

    pub about_title: &'static str,
    pub about_description: &'static str,
    pub disclaimer_title: &'static str,
    pub disclaimer: &'static str,
}

impl Catalog {
    /// The fixed recommendation string for a tier.
    pub fn recommendation(&self, tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::Low => self.recommendation_low,
            RiskTier::Medium => self.recommendation_medium,
            RiskTier::High => self.recommendation_high,
        }
    }

    /// The display label for a tier (e.g. "RISIKO TINGGI").
    pub fn tier_label(&self, tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::Low => self.result_low_risk,
            RiskTier::Medium => self.result_medium_risk,
            RiskTier::High => self.result_high_risk,
        }
    }

    /// The probability-interpretation sentence for a tier, with the score
    /// substituted in.
    pub fn interpretation(&self, tier: RiskTier, display_percent: f64) -> String {
        let template = match tier {
            RiskTier::Low => self.interpretation_low,
            RiskTier::Medium => self.interpretation_medium,
            RiskTier::High => self.interpretation_high,
        };
        template.replace("{score}", &format!("{:.1}", display_percent))
    }
}

pub static CATALOG_ID: Catalog = Catalog {
    result_header: "Hasil Analisis AI",
    risk_score_label: "Skor Risiko",
    risk_level_label: "Tingkat Risiko",
    recommendation_label: "Rekomendasi",

    result_low_risk: "RISIKO RENDAH",
    result_medium_risk: "RISIKO SEDANG",
    result_high_risk: "RISIKO TINGGI",

    recommendation_low: "Lanjutkan gaya hidup sehat.",
    recommendation_medium: "Disarankan untuk konsultasi dengan dokter untuk pemantauan.",
    recommendation_high: "SEGERA konsultasi dengan dokter spesialis jantung.",

    no_disease: "Tidak Sakit Jantung",
    disease: "Sakit Jantung",
    risk_distribution: "Distribusi Probabilitas Risiko",

    interpretation_low: "Skor probabilitas pasien ({score}%) berada di bawah ambang batas risiko sedang (25%), sehingga diklasifikasikan sebagai RISIKO RENDAH.",
    interpretation_medium: "Skor probabilitas pasien ({score}%) berada di antara ambang batas risiko sedang (25% - 45.9%), sehingga diklasifikasikan sebagai RISIKO SEDANG.",
    interpretation_high: "Skor probabilitas pasien ({score}%) berada di atas ambang batas risiko tinggi (46%), sehingga diklasifikasikan sebagai RISIKO TINGGI.",

    model_info_title: "Info Model",
    dataset_overview_title: "Tinjauan Dataset",
    total_samples_title: "Total Sampel",
    features_title: "Fitur",
    positive_cases_title: "Kasus Sakit Jantung",
    healthy_cases_title: "Kasus Sehat",

    about_title: "Apa itu aplikasi ini?",
    about_description: "Aplikasi prediksi penyakit jantung ini menggunakan algoritma machine learning untuk menilai risiko penyakit jantung berdasarkan berbagai indikator kesehatan pasien.",
    disclaimer_title: "Disclaimer Penting",
    disclaimer: "Aplikasi ini adalah prototipe untuk tujuan edukasi dan tidak boleh digunakan untuk diagnosis medis nyata. Hasil prediksi tidak menggantikan konsultasi dengan tenaga medis profesional.",
};

pub static CATALOG_EN: Catalog = Catalog {
    result_header: "AI Analysis Results",
    risk_score_label: "Risk Score",
    risk_level_label: "Risk Level",
    recommendation_label: "Recommendation",

    result_low_risk: "LOW RISK",
    result_medium_risk: "MEDIUM RISK",
    result_high_risk: "HIGH RISK",

    recommendation_low: "Continue healthy lifestyle practices.",
    recommendation_medium: "It is advisable to consult a doctor for monitoring.",
    recommendation_high: "IMMEDIATELY consult a cardiologist.",

    no_disease: "No Heart Disease",
    disease: "Heart Disease",
    risk_distribution: "Risk Probability Distribution",

    interpretation_low: "The patient's probability score ({score}%) is below the medium-risk threshold (25%), thus classified as LOW RISK.",
    interpretation_medium: "The patient's probability score ({score}%) is within the medium-risk threshold (25% - 45.9%), thus classified as MEDIUM RISK.",
    interpretation_high: "The patient's probability score ({score}%) is above the high-risk threshold (46%), thus classified as HIGH RISK.",

    model_info_title: "Model Info",
    dataset_overview_title: "Dataset Overview",
    total_samples_title: "Total Samples",
    features_title: "Features",
    positive_cases_title: "Heart Disease Cases",
    healthy_cases_title: "Healthy Cases",

    about_title: "What is this application?",
    about_description: "This heart disease prediction application uses a machine learning algorithm to assess heart disease risk based on various patient health indicators.",
    disclaimer_title: "Important Disclaimer",
    disclaimer: "This application is a prototype for educational purposes and must not be used for real medical diagnosis. The prediction results do not replace consultation with a professional healthcare provider.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_lang_falls_back_to_default() {
        assert_eq!(Locale::from_param(Some("fr")), Locale::Id);
        assert_eq!(Locale::from_param(None), Locale::Id);
        assert_eq!(Locale::from_param(Some("en")), Locale::En);
    }

    #[test]
    fn interpretation_substitutes_score() {
        let text = CATALOG_EN.interpretation(RiskTier::High, 61.05);
        assert!(text.contains("61.0%"));
        assert!(!text.contains("{score}"));
    }
}
