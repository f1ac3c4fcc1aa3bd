//! HTTP surface for the beer service. Requires the `http` feature.
//!
//! ## Routes
//!
//! - `POST /api/v1/beers` - create, `201` with the stored beer
//! - `GET /api/v1/beers` - list every beer
//! - `GET /api/v1/beers/:name` - find by name
//! - `DELETE /api/v1/beers/:id` - delete, `204`
//! - `PATCH /api/v1/beers/:id/increment` - body `{"quantity": n}`
//! - `GET /health` - `{"ok": true}`
//!
//! The name lookup and the delete share one path segment, so both routes are
//! registered as `/:key`. Errors are returned as `{"error": "<message>"}`,
//! including bodies that fail to deserialize (unknown style, negative amount),
//! which answer `400`.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use record_store::Repository;
use serde_json::json;
use tracing::info;

use crate::model::{Beer, BeerDto, BeerId, QuantityDto};
use crate::service::{BeerService, BeerServiceError};

const BEERS_PATH: &str = "/api/v1/beers";

impl BeerServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BeerServiceError::AlreadyRegistered(_)
            | BeerServiceError::StockExceeded { .. }
            | BeerServiceError::Invalid(_) => StatusCode::BAD_REQUEST,
            BeerServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            BeerServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BeerServiceError {
    fn into_response(self) -> Response {
        json_error(self.status_code(), self.to_string())
    }
}

fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Build an axum `Router` serving the given service.
pub fn router<R: Repository<Beer> + 'static>(service: Arc<BeerService<R>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            BEERS_PATH,
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            &format!("{BEERS_PATH}/:key"),
            get(find_by_name_handler::<R>).delete(delete_handler::<R>),
        )
        .route(
            &format!("{BEERS_PATH}/:key/increment"),
            patch(increment_handler::<R>),
        )
        .with_state(service)
}

/// Serve the service over HTTP until `shutdown` resolves.
///
/// The router, and with it this handle on the service, is dropped before
/// returning.
pub async fn serve<R, F>(
    service: Arc<BeerService<R>>,
    addr: SocketAddr,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    R: Repository<Beer> + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("HTTP stopped");
    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn create_handler<R: Repository<Beer> + 'static>(
    State(service): State<Arc<BeerService<R>>>,
    payload: Result<Json<BeerDto>, JsonRejection>,
) -> Response {
    let beer_dto = match json_body(payload) {
        Ok(beer_dto) => beer_dto,
        Err(response) => return response,
    };
    match service.create_beer(beer_dto).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn list_handler<R: Repository<Beer> + 'static>(
    State(service): State<Arc<BeerService<R>>>,
) -> Result<Json<Vec<BeerDto>>, BeerServiceError> {
    Ok(Json(service.list_all().await?))
}

async fn find_by_name_handler<R: Repository<Beer> + 'static>(
    State(service): State<Arc<BeerService<R>>>,
    Path(name): Path<String>,
) -> Result<Json<BeerDto>, BeerServiceError> {
    Ok(Json(service.find_by_name(&name).await?))
}

async fn delete_handler<R: Repository<Beer> + 'static>(
    State(service): State<Arc<BeerService<R>>>,
    Path(key): Path<String>,
) -> Response {
    let id = match parse_id(&key) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match service.delete_by_id(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

async fn increment_handler<R: Repository<Beer> + 'static>(
    State(service): State<Arc<BeerService<R>>>,
    Path(key): Path<String>,
    payload: Result<Json<QuantityDto>, JsonRejection>,
) -> Response {
    let id = match parse_id(&key) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let body = match json_body(payload) {
        Ok(body) => body,
        Err(response) => return response,
    };
    match service.increment(id, body.quantity).await {
        Ok(beer_dto) => Json(beer_dto).into_response(),
        Err(e) => e.into_response(),
    }
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| json_error(StatusCode::BAD_REQUEST, rejection.body_text()))
}

fn parse_id(key: &str) -> Result<BeerId, Response> {
    key.parse::<u64>().map(BeerId).map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            format!("{key} is not a valid beer id"),
        )
    })
}
