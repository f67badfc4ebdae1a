//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use crate::planner::RoutingError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lines", get(list_lines))
        .route("/stations", get(list_stations))
        .route("/stationsByLine", get(stations_by_line))
        .route("/shortestPath", get(shortest_path))
        .route("/searchStations", get(search_stations))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Names of all lines.
async fn list_lines(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.network.snapshot().list_lines())
}

/// Names of all stations. Interchanges appear once per line.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<String>> {
    let network = state.network.snapshot();
    let names = network
        .all_stations()
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    Json(names)
}

/// Station names of the first line matching `line`, in travel order.
async fn stations_by_line(
    State(state): State<AppState>,
    Query(req): Query<LineQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let line = req.line.ok_or_else(|| AppError::BadRequest {
        message: "Missing line parameter".to_string(),
    })?;

    let names = state
        .network
        .snapshot()
        .stations_on_line(&line)
        .iter()
        .map(|s| s.name().to_string())
        .collect();

    Ok(Json(names))
}

/// Shortest path between two stations.
///
/// Asks the upstream service first when one is configured, and answers
/// from the local network if that fails for any reason.
async fn shortest_path(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let (Some(source), Some(destination)) = (req.source, req.destination) else {
        return Err(AppError::BadRequest {
            message: "Missing source or destination parameter".to_string(),
        });
    };

    if let Some(upstream) = &state.upstream {
        match upstream.shortest_path(&source, &destination).await {
            Ok(route) => return Ok(Json(RouteResponse::clone(&route))),
            Err(e) => warn!(
                source = %source,
                destination = %destination,
                error = %e,
                "Upstream routing failed, using local network"
            ),
        }
    }

    let route = state.network.snapshot().find_route(&source, &destination)?;
    debug!(
        source = %source,
        destination = %destination,
        hops = route.total_stations(),
        interchanges = route.interchange_count(),
        connected = route.is_connected(),
        "Found route"
    );

    Ok(Json(RouteResponse::from_route(&route)))
}

/// Search stations by name. A missing query finds nothing.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<SearchQuery>,
) -> Json<Vec<StationView>> {
    let Some(query) = req.query else {
        return Json(Vec::new());
    };

    let stations = state
        .network
        .snapshot()
        .search_stations(&query)
        .iter()
        .map(StationView::from_station)
        .collect();

    Json(stations)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RoutingError> for AppError {
    fn from(e: RoutingError) -> Self {
        match e {
            RoutingError::StationNotResolved(query) => AppError::NotFound {
                message: format!("Station not found: {query}"),
            },
            RoutingError::InvalidRoute(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            warn!(%status, message = %message, "Request failed");
        } else {
            debug!(%status, message = %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
