use std::sync::Arc;
use nr_core::{Error, Result, SummarizationModel};
use tracing::info;

use crate::Config;

pub mod chat;
pub mod dummy;
pub mod huggingface;

pub use chat::ChatModel;
pub use dummy::DummyModel;
pub use huggingface::HuggingFaceModel;

pub const AVAILABLE_MODELS: &[&str] = &["huggingface", "chat", "dummy"];

/// Builds the summarization backend named in `config` (HuggingFace by default).
pub async fn create_model(config: Option<Config>) -> Result<Arc<dyn SummarizationModel>> {
    let config = config.unwrap_or_default();
    let name = config.model_name.clone().unwrap_or_else(|| "huggingface".to_string());

    let model: Arc<dyn SummarizationModel> = match name.to_lowercase().as_str() {
        "huggingface" | "hf" | "bart" => Arc::new(HuggingFaceModel::new(config)?),
        "chat" | "openai" | "ollama" => Arc::new(ChatModel::new(config)?),
        "dummy" => Arc::new(DummyModel::new(config).await?),
        other => {
            return Err(Error::Config(format!(
                "unknown summarization model '{}', available: {}",
                other,
                AVAILABLE_MODELS.join(", ")
            )))
        }
    };
    info!("🧠 Summarization model ready ({})", model.name());
    Ok(model)
}
