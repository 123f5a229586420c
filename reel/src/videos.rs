use anyhow::Result;
use axum::extract::Json;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json as ResponseJson;
use chrono::Utc;
use reel_api::prelude::*;

use super::ReelError;
use super::ReelState;

/// Path ids that are not unsigned integers can never match a video.
fn parse_id(id: &str) -> Result<u64, ReelError> {
    id.parse().map_err(|_| ReelError::not_found())
}

pub async fn list_videos(State(state): State<ReelState>) -> ResponseJson<Vec<Video>> {
    let store = state.store.lock().await;
    log::debug!("listing {} videos", store.list().len());
    ResponseJson(store.list().to_vec())
}

pub async fn get_video(
    State(state): State<ReelState>,
    Path(id): Path<String>,
) -> Result<ResponseJson<Video>, ReelError> {
    let id = parse_id(&id)?;
    let store = state.store.lock().await;
    match store.get_by_id(id) {
        Some(video) => Ok(ResponseJson(video.clone())),
        None => Err(ReelError::not_found()),
    }
}

pub async fn create_video(
    State(state): State<ReelState>,
    Json(payload): Json<CreateVideoInput>,
) -> Result<(StatusCode, ResponseJson<Video>), ReelError> {
    let new_video = validate_create(&payload).map_err(|errors| {
        log::warn!("rejected video create with {} errors", errors.len());
        ReelError::validation(errors)
    })?;

    let mut store = state.store.lock().await;
    let id = store.next_id();
    let video = Video::create(id, new_video, Utc::now());
    store.insert(video.clone());
    log::info!("created video {id}");

    Ok((StatusCode::CREATED, ResponseJson(video)))
}

pub async fn update_video(
    State(state): State<ReelState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateVideoInput>,
) -> Result<StatusCode, ReelError> {
    let id = parse_id(&id)?;
    let mut store = state.store.lock().await;
    if store.get_by_id(id).is_none() {
        return Err(ReelError::not_found());
    }

    let patch = validate_update(&payload).map_err(|errors| {
        log::warn!("rejected update of video {id} with {} errors", errors.len());
        ReelError::validation(errors)
    })?;
    store
        .update_by_id(id, patch)
        .ok_or_else(ReelError::not_found)?;
    log::info!("updated video {id}");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_video(
    State(state): State<ReelState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ReelError> {
    let id = parse_id(&id)?;
    let mut store = state.store.lock().await;
    store.remove_by_id(id).ok_or_else(ReelError::not_found)?;
    log::info!("deleted video {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// Reachable as `DELETE /videos` as well as the testing route.
pub async fn delete_all_videos(State(state): State<ReelState>) -> StatusCode {
    let mut store = state.store.lock().await;
    store.clear();
    log::info!("deleted all videos");
    StatusCode::NO_CONTENT
}
