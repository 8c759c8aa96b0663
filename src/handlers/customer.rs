use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::handlers::ListQuery;
use crate::models::CustomerData;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(retrieve_all).post(create))
        .route("/{id}", get(retrieve_one).put(update).delete(delete))
}

async fn create(
    State(state): State<AppState>,
    Json(data): Json<CustomerData>,
) -> Result<StatusCode, AppError> {
    state.customers.create(data).await?;
    Ok(StatusCode::CREATED)
}

async fn retrieve_all(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    if query.include_related() {
        Ok(Json(state.customers.list_with_cars().await?).into_response())
    } else {
        Ok(Json(state.customers.list().await?).into_response())
    }
}

async fn retrieve_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match state.customers.get(id).await? {
        Some(customer) => Ok(Json(customer).into_response()),
        None => Err(AppError::NotFound(format!(
            "Customer with id {} not found",
            id
        ))),
    }
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<CustomerData>,
) -> Result<StatusCode, AppError> {
    if state.customers.update(id, data).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Customer with id {} not found",
            id
        )))
    }
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.customers.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Customer with id {} not found",
            id
        )))
    }
}
