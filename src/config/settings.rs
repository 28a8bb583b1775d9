use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub model: ModelSettings,
    pub risk: RiskSettings,
    pub locale: LocaleSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
}

/// Fixed artifact paths, resolved once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    pub pipeline_path: String,
    /// Optional separate fitted-scaler artifact; overrides the scaler
    /// embedded in the pipeline artifact when set.
    pub scaler_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSettings {
    /// Named tiering policy: "asymmetric" (25/46) or "midpoint" (25/50).
    pub threshold_scheme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleSettings {
    pub default_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api: ApiSettings::default(),
            model: ModelSettings::default(),
            risk: RiskSettings::default(),
            locale: LocaleSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        ModelSettings {
            pipeline_path: "model/pipeline.json".to_string(),
            scaler_path: None,
        }
    }
}

impl Default for RiskSettings {
    fn default() -> Self {
        RiskSettings {
            threshold_scheme: "asymmetric".to_string(),
        }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        LocaleSettings {
            default_lang: "id".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        let _settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(Settings {
            api: ApiSettings {
                host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("API_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            model: ModelSettings {
                pipeline_path: env::var("MODEL_PATH")
                    .unwrap_or_else(|_| "model/pipeline.json".to_string()),
                scaler_path: env::var("SCALER_PATH").ok(),
            },
            risk: RiskSettings {
                threshold_scheme: env::var("RISK_THRESHOLD_SCHEME")
                    .unwrap_or_else(|_| "asymmetric".to_string()),
            },
            locale: LocaleSettings {
                default_lang: env::var("DEFAULT_LANG").unwrap_or_else(|_| "id".to_string()),
            },
            logging: LoggingSettings {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }
}
