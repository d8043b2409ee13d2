use std::sync::Arc;

use crate::applications::store::ApplicationStore;
use crate::config::Config;
use crate::llm_client::CompletionService;
use crate::pdf::FormAssets;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ApplicationStore>,
    pub completion: Arc<dyn CompletionService>,
    /// Fonts and logo for the application form, loaded once at startup.
    pub assets: Arc<FormAssets>,
    pub config: Config,
}
