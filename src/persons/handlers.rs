use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use super::protocol::{CountResponse, DeleteResponse, ErrorResponse};
use super::store::{CsvStore, StoreError};
use super::types::Person;

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            StoreError::InvalidTaxCode
            | StoreError::EmptyField(_)
            | StoreError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            StoreError::DuplicateId(_) | StoreError::DuplicateTaxCode => StatusCode::CONFLICT,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Corrupt(_) | StoreError::Csv(_) | StoreError::Io(_) => {
                tracing::error!("Storage failure: {}", self);
                // Details stay in the log; the client only learns the class.
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "internal storage error".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn handle_count(Extension(store): Extension<Arc<CsvStore>>) -> Response {
    match store.count() {
        Ok(count) => (StatusCode::OK, Json(CountResponse { count })).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_create(
    Extension(store): Extension<Arc<CsvStore>>,
    Json(person): Json<Person>,
) -> Response {
    match store.create(person) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_list(Extension(store): Extension<Arc<CsvStore>>) -> Response {
    match store.list() {
        Ok(people) => (StatusCode::OK, Json(people)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_get(
    Extension(store): Extension<Arc<CsvStore>>,
    Path(id): Path<u64>,
) -> Response {
    match store.get(id) {
        Ok(person) => (StatusCode::OK, Json(person)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_update(
    Extension(store): Extension<Arc<CsvStore>>,
    Path(id): Path<u64>,
    Json(person): Json<Person>,
) -> Response {
    match store.update(id, person) {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_delete(
    Extension(store): Extension<Arc<CsvStore>>,
    Path(id): Path<u64>,
) -> Response {
    match store.delete(id) {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                message: "item deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
