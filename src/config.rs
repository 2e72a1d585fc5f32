// src/config.rs

use crate::error::ConfigError;
use crate::gesture::ScaleBounds;
use crate::speech::SpeechOptions;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "QUESTCODE_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default = "default_max_width")]
    pub max_width: f32,
}

fn default_dark_mode() -> bool {
    true
}

fn default_max_width() -> f32 {
    650.0
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            max_width: default_max_width(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub speech: SpeechOptions,
    #[serde(default)]
    pub zoom: ScaleBounds,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuración embebida en el binario.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_yaml(include_str!("data/app_config.yaml"))
    }

    /// En nativo, `QUESTCODE_CONFIG` puede apuntar a un YAML que sustituye al embebido.
    pub fn load() -> Result<Self, ConfigError> {
        match override_path() {
            Some(path) => {
                log::info!("loading config from {path}");
                let text = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path, source })?;
                Self::from_yaml(&text)
            }
            None => Self::embedded(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let lower = self.zoom.lower_bound;
        if !(lower.is_finite() && lower > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "zoom.lower_bound must be positive, got {lower}"
            )));
        }
        if let Some(upper) = self.zoom.upper_bound {
            if !(upper.is_finite() && upper >= lower) {
                return Err(ConfigError::Invalid(format!(
                    "zoom.upper_bound ({upper}) must be >= lower_bound ({lower})"
                )));
            }
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(self.speech.rate) && positive(self.speech.pitch)) {
            return Err(ConfigError::Invalid(
                "speech.rate and speech.pitch must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn override_path() -> Option<String> {
    std::env::var(CONFIG_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn override_path() -> Option<String> {
    None
}
