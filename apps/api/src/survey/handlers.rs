use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommendation::RecommendationStatus;
use crate::state::AppState;
use crate::survey::collector::{collect, Collection};
use crate::survey::schema::SurveyConfig;

#[derive(Debug, Deserialize)]
pub struct AnswersRequest {
    pub answers: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub complete: bool,
    pub missing: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub reference_id: Uuid,
    pub reference_short: String,
    pub status: RecommendationStatus,
    pub recommendation: String,
}

fn run_collector(survey: &SurveyConfig, req: &AnswersRequest) -> Result<Collection, AppError> {
    let answers = req
        .answers
        .iter()
        .map(|(id, value)| (id.as_str(), value.as_str()));
    Ok(collect(&survey.questions, answers)?)
}

/// GET /api/v1/survey
pub async fn handle_get_survey(State(state): State<AppState>) -> Json<SurveyConfig> {
    Json(state.survey.as_ref().clone())
}

/// POST /api/v1/survey/progress
///
/// Reports which required questions are still unanswered. Nothing is generated or stored.
pub async fn handle_progress(
    State(state): State<AppState>,
    payload: Result<Json<AnswersRequest>, JsonRejection>,
) -> Result<Json<ProgressResponse>, AppError> {
    let Json(req) = payload?;
    let missing = match run_collector(&state.survey, &req)? {
        Collection::Complete(_) => Vec::new(),
        Collection::Incomplete { missing } => missing,
    };
    Ok(Json(ProgressResponse {
        complete: missing.is_empty(),
        missing,
    }))
}

/// POST /api/v1/survey/submit
///
/// Pipeline: collect → recommend (one LLM call) → persist (one document write).
/// A failed generation still returns 200 with diagnostic text; a failed write
/// fails the whole submission.
pub async fn handle_submit(
    State(state): State<AppState>,
    payload: Result<Json<AnswersRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(req) = payload?;
    let responses = match run_collector(&state.survey, &req)? {
        Collection::Complete(responses) => responses,
        Collection::Incomplete { missing } => return Err(AppError::Incomplete { missing }),
    };

    info!(
        "Survey '{}' submitted with {} answers",
        state.survey.variant,
        responses.len()
    );

    let recommendation = state.recommender.recommend(responses.clone()).await;
    let reference_id = state.store.persist(responses).await?;

    Ok(Json(SubmitResponse {
        reference_id,
        reference_short: reference_id.to_string()[..8].to_string(),
        status: recommendation.status(),
        recommendation: recommendation.into_text(),
    }))
}
