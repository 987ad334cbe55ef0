// src/state.rs
use crate::config::AppConfig;
use crate::services::chatbot::KeywordTable;
use crate::services::metrics_manager::MetricsManager;
use crate::services::session_manager::Transcript;

pub struct AppState {
    pub config: AppConfig,
    pub responses: KeywordTable<'static>,
    pub transcript: Transcript,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            responses: KeywordTable::default(),
            transcript: Transcript::new(),
            metrics: MetricsManager::new(),
        }
    }
}
