use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use tracing::error;

use crate::config::Settings;
use crate::kubernetes::fetch_logs;
use crate::types::LogQuery;

pub fn router(settings: Settings) -> Router {
    Router::new()
        .route("/api/logs", get(get_logs))
        .with_state(settings)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

async fn get_logs(State(settings): State<Settings>, Query(query): Query<LogQuery>) -> Response {
    match fetch_logs(&settings, &query).await {
        Ok(record) => pretty_json(StatusCode::OK, &record),
        Err(e) => {
            error!(
                "Log retrieval for {}/{} failed: {}",
                query.service_name, query.pod_name, e
            );
            pretty_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorBody {
                    error: e.to_string(),
                },
            )
        }
    }
}

/// Serializes with indentation; the endpoint is read by humans as much as by
/// machines.
fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("response serialization failed: {}", e),
        )
            .into_response(),
    }
}
