pub mod assessment;
pub mod attribution;
pub mod patient;

pub use assessment::{RiskAssessment, RiskTier};
pub use attribution::{AttributionColor, AttributionItem, ColoredAttribution};
pub use patient::{
    ChestPainType, PatientRecord, RestingEcg, Sex, StSlope, FEATURE_COUNT, FEATURE_NAMES,
};
