use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use super::errors::ApiError;
use crate::models::{validate_member, Member, MemberPayload};
use crate::services::MemberService;

#[derive(Clone)]
pub struct MembersState {
    pub members: MemberService,
}

pub fn member_routes(db: SqlitePool) -> Router {
    let state = MembersState {
        members: MemberService::new(db),
    };

    Router::new()
        .route("/members", get(get_members).post(add_member))
        .route("/members/:id", put(update_member).delete(delete_member))
        .with_state(state)
}

pub async fn get_members(
    State(state): State<MembersState>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let members = state.members.list_members().await?;

    Ok(Json(members))
}

pub async fn add_member(
    State(state): State<MembersState>,
    Json(payload): Json<MemberPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let member_data = validate_member(&payload).map_err(ApiError::Validation)?;

    state.members.create_member(member_data).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "New member added successfully" })),
    ))
}

pub async fn update_member(
    State(state): State<MembersState>,
    Path(id): Path<i64>,
    Json(payload): Json<MemberPayload>,
) -> Result<Json<Value>, ApiError> {
    state
        .members
        .get_member_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Member with id {id} not found")))?;

    let member_data = validate_member(&payload).map_err(ApiError::Validation)?;

    state.members.update_member(id, member_data).await?;

    Ok(Json(
        json!({ "message": "Member details updated successfully" }),
    ))
}

pub async fn delete_member(
    State(state): State<MembersState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let removed = state.members.delete_member(id).await?;
    if !removed {
        return Err(ApiError::NotFound(format!("Member with id {id} not found")));
    }

    Ok(Json(json!({ "message": "Member removed successfully" })))
}
