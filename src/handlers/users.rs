use axum::{extract::State, http::StatusCode};
use model::entities::user;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::extract::Json;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Request body for registering a new user
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username (must be unique)
    #[serde(default)]
    pub username: String,
}

/// User response model
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/exercise/new-user",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = ApiResponse<UserResponse>),
        (status = 400, description = "Missing or empty username", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    trace!("Entering create_user function");
    debug!("Creating user with username: {:?}", request.username);

    let username = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::Validation("No username provided".to_string()));
    }

    let new_user = user::ActiveModel {
        username: Set(username.to_string()),
        ..Default::default()
    };

    // No lookup-before-insert here: the schema-level unique constraint on
    // username decides duplicates, which also closes the race between
    // concurrent registrations.
    trace!("Attempting to insert new user into database");
    let user_model = new_user
        .insert(&state.db)
        .await
        .map_err(|db_error| ApiError::from_user_insert_error(db_error, username))?;

    info!(
        "User created successfully with ID: {}, username: {}",
        user_model.id, user_model.username
    );
    let response = ApiResponse {
        data: UserResponse::from(user_model),
        message: "User created successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/exercise/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = ApiResponse<Vec<UserResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    trace!("Entering get_users function");
    debug!("Fetching all users from database");

    let users = user::Entity::find().all(&state.db).await?;
    let user_count = users.len();

    let user_responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    info!("Successfully retrieved {} users", user_count);
    let response = ApiResponse {
        data: user_responses,
        message: "Users retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
