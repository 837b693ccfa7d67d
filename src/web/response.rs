//! JSON bodies shared by all endpoints.
use crate::types::User;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Body of a successful request without results.
#[derive(Serialize)]
pub struct OkResponse {
    ok: bool,
}

/// Body of a failed request.
#[derive(Serialize)]
pub struct ErrorResponse {
    ok: bool,
    /// A human readable error.
    error: String,
}

/// Body of a successful search.
#[derive(Serialize)]
pub struct SearchResponse {
    ok: bool,
    results: Vec<User>,
}

pub fn ok_response(status: StatusCode) -> Response {
    (status, Json(OkResponse { ok: true })).into_response()
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    let body = ErrorResponse {
        ok: false,
        error: error.into(),
    };
    (status, Json(body)).into_response()
}

pub fn search_response(status: StatusCode, results: Vec<User>) -> Response {
    (status, Json(SearchResponse { ok: true, results })).into_response()
}
