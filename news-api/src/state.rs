use news_data::NewsStore;

use crate::services::NewsService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState<S> {
    pub service: NewsService<S>,
}

impl<S: NewsStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            service: NewsService::new(store),
        }
    }
}
