// Risk tiering and presentation module
// Turns raw probabilities into categorized, display-ready results

pub mod errors;
pub mod presenter;
pub mod tiering;

pub use errors::RiskError;
pub use presenter::{
    GaugeBand, GaugeChartSpec, PieChartSpec, PieSegment, RiskPresenter, SignColorMap, GAUGE_BANDS,
};
pub use tiering::{
    ThresholdScheme, HIGH_THRESHOLD, MEDIUM_THRESHOLD, MIDPOINT_HIGH_THRESHOLD,
};
