//! HTTP routes for the leaderboard API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::api::{ErrorBody, LeaderboardPage, LeaderboardRow, SubmitRequest, SubmittedEntry};
use crate::service::{LeaderboardService, SubmitError};

/// Query string of `GET /api/leaderboard`.
///
/// `limit` arrives as raw text; anything that does not parse as an integer
/// falls back to the default page size instead of erroring.
#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<String>,
}

/// Builds the leaderboard router around a shared service.
pub fn router(service: LeaderboardService) -> Router {
    Router::new()
        .route("/api/leaderboard", get(list_entries).post(submit_entry))
        .with_state(service)
}

#[instrument(skip(service, params), fields(limit = ?params.limit))]
async fn list_entries(
    State(service): State<LeaderboardService>,
    Query(params): Query<ListParams>,
) -> Response {
    let limit = params.limit.as_deref().and_then(|l| l.parse::<i64>().ok());

    match service.top(limit) {
        Ok(entries) => {
            let page = LeaderboardPage {
                entries: entries.iter().map(LeaderboardRow::from).collect(),
            };
            (StatusCode::OK, Json(page)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Leaderboard query failed");
            let body = ErrorBody {
                error: "failed to load leaderboard".to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[instrument(skip(service, body))]
async fn submit_entry(
    State(service): State<LeaderboardService>,
    body: Result<Json<SubmitRequest>, JsonRejection>,
) -> Response {
    // A body that does not match the schema is the same 400 shape as a
    // validation failure.
    let Json(req) = match body {
        Ok(json) => json,
        Err(rejection) => {
            warn!(error = %rejection, "Malformed submission body");
            let body = ErrorBody {
                error: rejection.body_text(),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    match service.submit(req) {
        Ok(stored) => (StatusCode::CREATED, Json(SubmittedEntry::from(&stored))).into_response(),
        Err(SubmitError::Validation(e)) => {
            info!(field = e.field(), reason = %e, "Submission rejected");
            let body = ErrorBody {
                error: e.to_string(),
            };
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Err(SubmitError::Db(e)) => {
            warn!(error = %e, "Submission failed to persist");
            let body = ErrorBody {
                error: "failed to store score".to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
