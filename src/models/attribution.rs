use serde::{Deserialize, Serialize};

/// One entry of the explanation engine's ranked output: how strongly a
/// feature pushed this prediction toward (positive weight) or away from
/// (negative weight) the positive class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionItem {
    pub feature_name: String,
    pub signed_weight: f64,
}

/// Which side of the prediction a weight supports. Sign is the only
/// determinant; magnitude never changes the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionColor {
    SupportsDisease,
    OpposesDisease,
}

/// Attribution item with the presenter's color applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredAttribution {
    pub feature_name: String,
    pub signed_weight: f64,
    pub color: AttributionColor,
    /// Concrete chart color resolved through the sign-to-color map.
    pub render_color: String,
}
