//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::cache::FlashStore;
use crate::config::environment::EnvironmentConfig;
use crate::repositories::Repositories;

#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
    pub flash: Arc<dyn FlashStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        flash: Arc<dyn FlashStore>,
        config: EnvironmentConfig,
    ) -> Self {
        Self {
            repositories,
            flash,
            config,
        }
    }
}
