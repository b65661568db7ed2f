use std::sync::Arc;
use nr_core::Publisher;
use nr_digest::Roundup;

pub struct AppState {
    pub roundup: Roundup,
    pub publisher: Option<Arc<dyn Publisher>>,
}
