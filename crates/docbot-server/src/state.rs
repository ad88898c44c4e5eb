//! Shared handler state.

use crate::service::ChatbotService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ChatbotService>,
}

impl AppState {
    pub fn new(service: Arc<dyn ChatbotService>) -> Self {
        Self { service }
    }
}
