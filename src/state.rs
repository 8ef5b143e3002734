use std::sync::Arc;

use crate::mail::EmailTransport;
use crate::settings::SettingsStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<dyn SettingsStore>,
    pub transport: Arc<dyn EmailTransport>,
}

impl AppState {
    pub fn new(settings: Arc<dyn SettingsStore>, transport: Arc<dyn EmailTransport>) -> Self {
        Self {
            settings,
            transport,
        }
    }
}
