use std::sync::Arc;

use crate::recommendation::Recommender;
use crate::store::ResponseStore;
use crate::survey::schema::SurveyConfig;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable or internally synchronized; submissions share
/// nothing else.
#[derive(Clone)]
pub struct AppState {
    /// The survey variant selected at startup.
    pub survey: Arc<SurveyConfig>,
    pub recommender: Recommender,
    pub store: ResponseStore,
}
