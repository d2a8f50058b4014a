use axum::{extract::State, http::StatusCode};
use chrono::NaiveDate;
use model::entities::{exercise, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::extract::Json;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Request body for adding an exercise to a user's log
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddExerciseRequest {
    /// ID of the user to log against
    pub user_id: i32,
    /// What was done
    pub description: String,
    /// Duration in minutes
    pub duration: i32,
    /// Exercise date (YYYY-MM-DD); defaults to today when omitted
    pub date: Option<NaiveDate>,
}

/// A single log entry as it appears in responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseResponse {
    pub description: String,
    pub duration: i32,
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
}

impl From<exercise::Model> for ExerciseResponse {
    fn from(model: exercise::Model) -> Self {
        Self {
            description: model.description,
            duration: model.duration,
            date: model.date,
        }
    }
}

/// A user together with their full exercise log
#[derive(Debug, Serialize, ToSchema)]
pub struct UserWithLogResponse {
    pub id: i32,
    pub username: String,
    pub log: Vec<ExerciseResponse>,
}

/// Add an exercise to a user's log
#[utoipa::path(
    post,
    path = "/api/exercise/add",
    tag = "exercises",
    request_body = AddExerciseRequest,
    responses(
        (status = 201, description = "Exercise logged successfully", body = ApiResponse<UserWithLogResponse>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn add_exercise(
    State(state): State<AppState>,
    Json(request): Json<AddExerciseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserWithLogResponse>>), ApiError> {
    trace!("Entering add_exercise function");
    debug!(
        "Adding exercise '{}' ({} min) for user ID: {}",
        request.description, request.duration, request.user_id
    );

    // The exercise must attach to an existing user
    let user_model = user::Entity::find_by_id(request.user_id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::UserNotFound(request.user_id))?;

    // Omitted date defaults to today (UTC)
    let date = request
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let new_exercise = exercise::ActiveModel {
        user_id: Set(user_model.id),
        description: Set(request.description.clone()),
        duration: Set(request.duration),
        date: Set(date),
        ..Default::default()
    };

    trace!("Attempting to insert new exercise into database");
    let exercise_model = new_exercise.insert(&state.db).await?;
    info!(
        "Exercise created successfully with ID: {} for user ID: {}",
        exercise_model.id, user_model.id
    );

    // Return the updated user with the fully populated log, in insertion
    // order.
    let log = exercise::Entity::find()
        .filter(exercise::Column::UserId.eq(user_model.id))
        .order_by_asc(exercise::Column::Id)
        .all(&state.db)
        .await?
        .into_iter()
        .map(ExerciseResponse::from)
        .collect();

    let response = ApiResponse {
        data: UserWithLogResponse {
            id: user_model.id,
            username: user_model.username,
            log,
        },
        message: "Exercise logged successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::CREATED, Json(response)))
}
