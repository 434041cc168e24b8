use std::sync::Arc;

use crate::config::Config;
use crate::glm::GlmProvider;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub glm: GlmProvider,
}

impl AppState {
    pub fn new(config: Config, glm: GlmProvider) -> Self {
        Self {
            config: Arc::new(config),
            glm,
        }
    }
}
