use pulse_scanner::MentionService;
use std::sync::Arc;

/// Shared state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
  pub service: Arc<MentionService>,
}

impl AppState {
  pub fn new(service: MentionService) -> Self {
    Self { service: Arc::new(service) }
  }
}
