pub mod settings;

pub use settings::{
    ApiSettings, LocaleSettings, LoggingSettings, ModelSettings, RiskSettings, Settings,
};
