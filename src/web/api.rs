//! This module defines the HTTP endpoints for managing users.
use super::response::{error_response, ok_response, search_response};
use super::upload::parse_users_csv;
use crate::logging::{msg, prefixed, LogLevel, Logger, SharedLogger, Tape};
use crate::storage::{UserFilter, UserStore};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

/// Thresholds of the tape each request logs through.
#[derive(Debug, Clone, Copy)]
pub struct TapeLevels {
    /// Entries at or below this level are held back.
    pub suppress: LogLevel,
    /// Entries at or above this level print the held back entries.
    pub dump: LogLevel,
}

impl Default for TapeLevels {
    fn default() -> Self {
        Self {
            suppress: LogLevel::Debug,
            dump: LogLevel::Error,
        }
    }
}

/// Everything the handlers need, passed in explicitly.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub logger: SharedLogger,
    pub levels: TapeLevels,
}

impl AppState {
    /// Starts the log of a single API call.
    ///
    /// Visible entries are labelled `(APICall <method> <path> <id>)`, replayed
    /// ones `(Tape (APICall ...))`.
    fn request_tape(&self, method: &Method, path: &str) -> Tape {
        let call = format!("APICall {method} {path} {}", Uuid::new_v4());
        Tape::new(
            self.levels.suppress,
            Some(prefixed(Some(self.logger.clone()), format!("(Tape ({call}))"))),
            self.levels.dump,
            Some(prefixed(Some(self.logger.clone()), format!("({call})"))),
        )
    }
}

/// The media type of a `Content-Type` header, without parameters.
fn content_type(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Adds users to the store from a CSV body.
///
/// Responds with 201 on success, 415 for a non-CSV content type, 422 for an
/// empty or malformed body and 500 when the store fails.
#[axum::debug_handler]
pub async fn create_users(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let tape = state.request_tape(&method, uri.path());
    tape.debug(msg!("Request: {} {} headers={:?}", method, uri, headers.clone()));

    let content_type = content_type(&headers);
    if content_type != "text/csv" {
        tape.error(msg!("Wrong content type: {content_type:?}"));
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            r#"Expected Content-Type header to be "text/csv""#,
        );
    }

    if body.is_empty() {
        tape.error("Empty body".into());
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "Empty CSV file not allowed");
    }

    let users = match parse_users_csv(&body[..]) {
        Ok(users) => users,
        Err(e) => {
            let message = format!("CSV parsing error: {e}");
            tape.error(message.clone().into());
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, message);
        }
    };

    if users.is_empty() {
        tape.error("Empty users list".into());
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "User CSV file must contain at least one user",
        );
    }

    tape.debug(msg!("Users that will be added to the store: {:?}", users.clone()));

    if let Err(e) = state.store.create_users(users, &tape).await {
        let message = format!("Database error: {e}");
        tape.error(msg!("Store error while calling create_users: {e}"));
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, message);
    }

    tape.info("Returning StatusCreated".into());
    ok_response(StatusCode::CREATED)
}

/// Returns all users whose columns contain the queried substrings.
///
/// At least one of `name`, `phone_number`, `country` or `city` must be given.
/// Results are returned with 302 Found.
#[axum::debug_handler]
pub async fn search_users(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(filter): Query<UserFilter>,
) -> Response {
    let tape = state.request_tape(&method, uri.path());
    tape.debug(msg!("Request: {method} {uri}"));

    if filter.is_empty() {
        tape.error("Empty search query".into());
        return error_response(StatusCode::BAD_REQUEST, "Empty search criteria");
    }

    match state.store.search_users(&filter, &tape).await {
        Ok(users) => {
            tape.debug(msg!("Found {} users", users.len()));
            search_response(StatusCode::FOUND, users)
        }
        Err(e) => {
            let message = format!("Database error: {e}");
            tape.error(msg!("Store error while calling search_users: {e}"));
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}
