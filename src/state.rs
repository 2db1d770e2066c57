use crate::config::Config;
use crate::query::QueryService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<dyn QueryService>,
    pub config: Arc<Config>,
}
