use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use super::errors::ApiError;
use crate::models::{validate_workout_session, WorkoutSession, WorkoutSessionPayload};
use crate::services::WorkoutSessionService;

#[derive(Clone)]
pub struct WorkoutSessionsState {
    pub sessions: WorkoutSessionService,
}

#[derive(Debug, Deserialize)]
pub struct ByMemberIdQuery {
    pub member_id: i64,
}

pub fn workout_session_routes(db: SqlitePool) -> Router {
    let state = WorkoutSessionsState {
        sessions: WorkoutSessionService::new(db),
    };

    Router::new()
        .route(
            "/workout-sessions",
            get(get_workout_sessions).post(schedule_workout_session),
        )
        .route(
            "/workout-sessions/by-member-id",
            get(get_workout_sessions_by_member_id),
        )
        .route(
            "/workout-sessions/:id",
            put(update_workout_session).delete(delete_workout_session),
        )
        .with_state(state)
}

pub async fn get_workout_sessions(
    State(state): State<WorkoutSessionsState>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let sessions = state.sessions.list_sessions().await?;

    Ok(Json(sessions))
}

pub async fn get_workout_sessions_by_member_id(
    State(state): State<WorkoutSessionsState>,
    Query(query): Query<ByMemberIdQuery>,
) -> Result<Json<Vec<WorkoutSession>>, ApiError> {
    let sessions = state
        .sessions
        .get_sessions_by_member_id(query.member_id)
        .await?;

    if sessions.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No sessions or data found associated with Member ID: {}",
            query.member_id
        )));
    }

    Ok(Json(sessions))
}

pub async fn schedule_workout_session(
    State(state): State<WorkoutSessionsState>,
    Json(payload): Json<WorkoutSessionPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let session_data = validate_workout_session(&payload).map_err(ApiError::Validation)?;

    state.sessions.create_session(session_data).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "New workout session scheduled successfully" })),
    ))
}

pub async fn update_workout_session(
    State(state): State<WorkoutSessionsState>,
    Path(id): Path<i64>,
    Json(payload): Json<WorkoutSessionPayload>,
) -> Result<Json<Value>, ApiError> {
    state
        .sessions
        .get_session_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Workout session with id {id} not found")))?;

    let session_data = validate_workout_session(&payload).map_err(ApiError::Validation)?;

    state.sessions.update_session(id, session_data).await?;

    Ok(Json(
        json!({ "message": "Workout session updated successfully" }),
    ))
}

pub async fn delete_workout_session(
    State(state): State<WorkoutSessionsState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let removed = state.sessions.delete_session(id).await?;
    if !removed {
        return Err(ApiError::NotFound(format!(
            "Workout session with id {id} not found"
        )));
    }

    Ok(Json(json!({ "message": "Session removed successfully" })))
}
