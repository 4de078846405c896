//! HTTP transport for battles — maps requests onto a [`BattleSchema`].
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /battles` — create a battle. Body = `{ "id": .., "board_size": .. }`.
//!   `201` with the new record, `422` with `{ "errors": {..} }` on bad input.
//! - `GET /battles/:id` — the stored record, or `{}` when there is none.
//! - `GET /health` — health check returning `{ "ok": true }`.

use std::future::Future;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::battle::BattleSchema;
use crate::codec::Codec;
use crate::error::CreateError;
use crate::store::KeyValueStore;

/// Build an axum `Router` serving battles from the given schema.
pub fn router<S, C>(schema: Arc<BattleSchema<S, C>>) -> Router
where
    S: KeyValueStore + 'static,
    C: Codec + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/battles", post(create_handler::<S, C>))
        .route("/battles/:id", get(get_handler::<S, C>))
        .with_state(schema)
}

/// Serve battles over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
///
/// Stops accepting connections once `signal` resolves; pass
/// `std::future::pending()` to run until the process exits.
pub async fn serve<S, C, F>(
    schema: Arc<BattleSchema<S, C>>,
    addr: &str,
    signal: F,
) -> Result<(), std::io::Error>
where
    S: KeyValueStore + 'static,
    C: Codec + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(schema);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("battle server listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
}

/// `GET /health` — returns `{ "ok": true }`.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `POST /battles` — validate and store a new battle.
async fn create_handler<S, C>(
    State(schema): State<Arc<BattleSchema<S, C>>>,
    Json(input): Json<Value>,
) -> Response
where
    S: KeyValueStore + 'static,
    C: Codec + 'static,
{
    match schema.create(&input) {
        Ok((battle, record)) => (
            StatusCode::CREATED,
            Json(json!({ "id": battle.id, "board": record.board })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /battles/:id` — fetch a stored battle.
async fn get_handler<S, C>(
    State(schema): State<Arc<BattleSchema<S, C>>>,
    Path(id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
    C: Codec + 'static,
{
    match schema.get_battle(&id) {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => (StatusCode::OK, Json(json!({}))).into_response(),
        Err(e) => {
            warn!(battle_id = %id, error = %e, "failed to fetch battle");
            let body = json!({ "error": e.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

fn error_response(err: CreateError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err {
        CreateError::Invalid(errors) => json!({ "errors": errors }),
        CreateError::Battle(e) => {
            warn!(error = %e, "failed to store battle");
            json!({ "error": e.to_string() })
        }
    };
    (status, Json(body)).into_response()
}
