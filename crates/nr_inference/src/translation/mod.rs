use std::sync::Arc;
use nr_core::{Error, Result, TranslationModel};
use tracing::info;

use crate::Config;

pub mod google;
pub mod passthrough;

pub use google::GoogleTranslateModel;
pub use passthrough::PassthroughModel;

pub const AVAILABLE_TRANSLATORS: &[&str] = &["google", "passthrough"];

/// Builds the translation backend named in `config` (Google by default).
pub fn create_translator(config: Option<Config>) -> Result<Arc<dyn TranslationModel>> {
    let config = config.unwrap_or_default();
    let name = config.model_name.clone().unwrap_or_else(|| "google".to_string());

    let model: Arc<dyn TranslationModel> = match name.to_lowercase().as_str() {
        "google" => Arc::new(GoogleTranslateModel::new(config)?),
        "passthrough" | "none" => Arc::new(PassthroughModel),
        other => {
            return Err(Error::Config(format!(
                "unknown translator '{}', available: {}",
                other,
                AVAILABLE_TRANSLATORS.join(", ")
            )))
        }
    };
    info!("🌐 Translation backend ready ({})", model.name());
    Ok(model)
}
