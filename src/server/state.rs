use std::sync::Arc;

use crate::core::Resolver;

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
}

impl AppState {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}
