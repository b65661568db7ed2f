use nr_core::{Result, TranslationModel};

/// Returns text unchanged. Useful offline and in tests.
#[derive(Debug, Default)]
pub struct PassthroughModel;

#[async_trait::async_trait]
impl TranslationModel for PassthroughModel {
    fn name(&self) -> &str {
        "Passthrough"
    }

    async fn translate(&self, text: &str, _target_language: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
