use config::Config;
use sse::EmitterSettings;

pub mod config;
pub mod logging;

// Service-level state containing only infrastructure concerns.
// Needs to implement Clone to be able to be passed into Router as State.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(app_config: Config) -> Self {
        Self { config: app_config }
    }

    /// Per-request emitter configuration; each caller gets its own copy so
    /// concurrent streams stay independent.
    pub fn emitter_settings(&self) -> EmitterSettings {
        self.config.emitter_settings()
    }
}
