use std::sync::Arc;

use crate::model::ModelManager;
use crate::render::{MarkupRenderer, TextRenderer};

#[derive(Clone)]
pub struct AppState {
    mm: ModelManager,
    renderer: Arc<dyn TextRenderer>,
}

impl AppState {
    pub fn new(mm: ModelManager) -> Self {
        Self {
            mm,
            renderer: Arc::new(MarkupRenderer),
        }
    }

    pub fn with_renderer(mm: ModelManager, renderer: Arc<dyn TextRenderer>) -> Self {
        Self { mm, renderer }
    }

    pub fn pool(&self) -> &ModelManager {
        &self.mm
    }

    pub fn renderer(&self) -> &dyn TextRenderer {
        self.renderer.as_ref()
    }
}
