pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;

use services::genie::ManagerFactory;
use std::sync::Arc;

/// Shared application state: builds one Genie adapter per request.
#[derive(Clone)]
pub struct AppState {
    pub managers: Arc<dyn ManagerFactory>,
}

impl AppState {
    pub fn new(managers: Arc<dyn ManagerFactory>) -> Self {
        Self { managers }
    }
}
