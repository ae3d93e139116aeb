use std::sync::Arc;

use crate::application::clock::{Clock, SystemClock};
use crate::application::data_service::DataService;
use crate::application::user_service::UserService;

pub mod app_error;
pub mod envelope;
pub mod extract;
pub mod handlers;
pub mod http_handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;

/// Hosting model the router is serving, reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Server,
    Edge,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Edge => "edge",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub(crate) user_service: Arc<UserService>,
    pub(crate) data_service: Arc<DataService>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) platform: Platform,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(clock.clone())),
            data_service: Arc::new(DataService::new(clock.clone())),
            clock,
            platform: Platform::Server,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
