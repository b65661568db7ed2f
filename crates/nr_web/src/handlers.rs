use axum::{extract::State, Json};
use nr_core::{Article, Digest, Error, Notice, PublishedPost};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub topic: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummariesRequest {
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct SummariesResponse {
    pub articles: Vec<Article>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Deserialize)]
pub struct DigestBody {
    pub topic: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    pub articles: Vec<Article>,
}

fn default_language() -> String {
    nr_core::SOURCE_LANGUAGE.to_string()
}

#[derive(Debug, Serialize)]
pub struct DigestResponse {
    pub digest: Digest,
    pub notices: Vec<Notice>,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Vec<Article>> {
    let articles = state
        .roundup
        .find(&request.topic, request.location.as_deref())
        .await?;
    Ok(Json(articles))
}

pub async fn summaries(
    State(state): State<Arc<AppState>>,
    Json(mut request): Json<SummariesRequest>,
) -> ApiResult<SummariesResponse> {
    let notices = state.roundup.summarize_articles(&mut request.articles).await;
    Ok(Json(SummariesResponse {
        articles: request.articles,
        notices,
    }))
}

async fn build_digest(state: &AppState, body: DigestBody) -> Result<DigestResponse, ApiError> {
    let outcome = state
        .roundup
        .digest(body.articles, &body.topic, body.location.as_deref(), &body.language)
        .await?;
    Ok(DigestResponse {
        digest: outcome.value,
        notices: outcome.notices,
    })
}

pub async fn digest(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DigestBody>,
) -> ApiResult<DigestResponse> {
    Ok(Json(build_digest(&state, body).await?))
}

pub async fn publish(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DigestBody>,
) -> ApiResult<PublishedPost> {
    let publisher = state
        .publisher
        .clone()
        .ok_or_else(|| Error::Config("publishing is not configured".to_string()))?;
    let built = build_digest(&state, body).await?;
    let post = state.roundup.publish(publisher.as_ref(), &built.digest).await?;
    Ok(Json(post))
}
