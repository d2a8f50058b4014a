use axum::extract::State;
use chrono::NaiveDate;
use model::entities::{exercise, user};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::handlers::exercises::ExerciseResponse;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Query parameters for the log endpoint
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    /// ID of the user whose log to fetch
    pub user_id: i32,
    /// Inclusive lower bound on the exercise date (YYYY-MM-DD)
    pub from_date: Option<NaiveDate>,
    /// Inclusive upper bound on the exercise date (YYYY-MM-DD)
    pub to_date: Option<NaiveDate>,
    /// Maximum number of entries to return, applied after sorting
    pub limit: Option<u64>,
}

/// A user's filtered exercise log
#[derive(Debug, Serialize, ToSchema)]
pub struct LogResponse {
    pub id: i32,
    pub username: String,
    /// Matching entries, most recent first
    pub log: Vec<ExerciseResponse>,
    /// Number of entries in the returned log
    pub count: usize,
}

/// Query a user's exercise log
///
/// Date bounds are inclusive and applied independently; results are always
/// sorted by date descending (ties broken by newest entry first) before
/// the limit is taken, so the output is deterministic regardless of which
/// filters are present. `count` reflects the returned log, not the user's
/// total.
#[utoipa::path(
    get,
    path = "/api/exercise/log",
    tag = "exercises",
    params(
        ("userId" = i32, Query, description = "User ID"),
        ("fromDate" = Option<NaiveDate>, Query, description = "Inclusive lower date bound (YYYY-MM-DD)"),
        ("toDate" = Option<NaiveDate>, Query, description = "Inclusive upper date bound (YYYY-MM-DD)"),
        ("limit" = Option<u64>, Query, description = "Maximum number of entries to return"),
    ),
    responses(
        (status = 200, description = "Log retrieved successfully", body = ApiResponse<LogResponse>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_log(
    Query(query): Query<LogQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<LogResponse>>, ApiError> {
    trace!("Entering get_log function");
    debug!(
        "Fetching log for user ID: {} (from: {:?}, to: {:?}, limit: {:?})",
        query.user_id, query.from_date, query.to_date, query.limit
    );

    let user_model = user::Entity::find_by_id(query.user_id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::UserNotFound(query.user_id))?;

    let mut select = exercise::Entity::find()
        .filter(exercise::Column::UserId.eq(user_model.id))
        .order_by_desc(exercise::Column::Date)
        .order_by_desc(exercise::Column::Id);

    if let Some(from_date) = query.from_date {
        select = select.filter(exercise::Column::Date.gte(from_date));
    }
    if let Some(to_date) = query.to_date {
        select = select.filter(exercise::Column::Date.lte(to_date));
    }
    if let Some(limit) = query.limit {
        select = select.limit(limit);
    }

    let log: Vec<ExerciseResponse> = select
        .all(&state.db)
        .await?
        .into_iter()
        .map(ExerciseResponse::from)
        .collect();
    let count = log.len();

    info!(
        "Successfully retrieved {} log entries for user ID: {}",
        count, user_model.id
    );
    let response = ApiResponse {
        data: LogResponse {
            id: user_model.id,
            username: user_model.username,
            log,
            count,
        },
        message: "Log retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
