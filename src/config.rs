use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Pretrained artifact used when no config overrides it.
pub const DEFAULT_MODEL_URL: &str =
    "https://storage.googleapis.com/critter-lens/models/animals-v1/model.onnx";

/// Optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "critter-lens.json";

/// Environment variable holding a local model path; wins over the config.
pub const MODEL_ENV_VAR: &str = "CRITTER_LENS_MODEL";

/// Where the model artifact comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    Url(String),
    Path(PathBuf),
}

/// Settings read from [`CONFIG_FILE`], all optional:
///
/// ```json
/// { "model_url": "https://example.com/model.onnx" }
/// { "model_path": "models/animals.onnx" }
/// ```
///
/// `model_path` wins over `model_url`; [`MODEL_ENV_VAR`] wins over both.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub model_url: String,
    pub model_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            model_url: DEFAULT_MODEL_URL.to_string(),
            model_path: None,
        }
    }
}

impl AppConfig {
    /// Load the config file if present, else defaults.
    pub fn load() -> Result<Self> {
        match std::fs::read_to_string(CONFIG_FILE) {
            Ok(text) => {
                let config = serde_json::from_str(&text)
                    .with_context(|| format!("parsing {CONFIG_FILE}"))?;
                log::info!("Loaded {CONFIG_FILE}");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
            Err(e) => Err(e).with_context(|| format!("reading {CONFIG_FILE}")),
        }
    }

    /// Resolve where the model comes from, applying the env override.
    pub fn model_source(&self) -> ModelSource {
        self.model_source_with_env(std::env::var(MODEL_ENV_VAR).ok().as_deref())
    }

    fn model_source_with_env(&self, env_path: Option<&str>) -> ModelSource {
        if let Some(path) = env_path {
            return ModelSource::Path(PathBuf::from(path));
        }
        match &self.model_path {
            Some(path) => ModelSource::Path(path.clone()),
            None => ModelSource::Url(self.model_url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_builtin_artifact() {
        let config = AppConfig::default();
        assert_eq!(
            config.model_source_with_env(None),
            ModelSource::Url(DEFAULT_MODEL_URL.to_string())
        );
    }

    #[test]
    fn config_file_overrides_the_url() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "model_url": "https://example.com/m.onnx" }"#).unwrap();
        assert_eq!(
            config.model_source_with_env(None),
            ModelSource::Url("https://example.com/m.onnx".to_string())
        );
    }

    #[test]
    fn local_path_wins_over_url() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "model_url": "https://example.com/m.onnx", "model_path": "local.onnx" }"#,
        )
        .unwrap();
        assert_eq!(
            config.model_source_with_env(None),
            ModelSource::Path(PathBuf::from("local.onnx"))
        );
    }

    #[test]
    fn env_override_wins_over_everything() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "model_path": "local.onnx" }"#).unwrap();
        assert_eq!(
            config.model_source_with_env(Some("/tmp/override.onnx")),
            ModelSource::Path(PathBuf::from("/tmp/override.onnx"))
        );
    }
}
