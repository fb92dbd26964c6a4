//! Trip planner HTTP service.
//!
//! # Endpoints
//!
//! - `POST /api/search` - cheapest and fastest routes between two cities
//! - `POST /api/recommend` - affordable destinations from a city
//! - `GET /api/cities` - the loaded catalog
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe
//!
//! # Configuration
//!
//! - `TRIPPLANNER_CATALOG_PATH` - JSON catalog (default: built-in cities)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `PLANNER_MAX_STOPS`, `PLANNER_MAX_RESULTS`, `PLANNER_RECOMMEND_STOPS`
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - json (default) or text

use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use tripplanner_lib::{
    recommend_routes, search_route, CandidateRoute, CatalogFile, ResultBundle,
};
use tripplanner_service_shared::{
    from_lib_error, health_live, health_ready, init_logging, AppState, LoggingConfig,
    ProblemDetails, RecommendRequest, RequestId, SearchRequest, ServiceConfig, Validate,
};

/// Body of a successful `POST /api/recommend`.
#[derive(Debug, Serialize)]
struct RecommendResponse {
    recommendations: Vec<CandidateRoute>,
}

type HandlerResult<T> = Result<Json<T>, ProblemDetails>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("route");
    init_logging(&logging_config);

    let config = ServiceConfig::from_env()?;
    info!(
        catalog = ?config.catalog_path,
        port = config.port,
        max_stops = config.planner.max_stops,
        max_results = config.planner.max_results,
        recommend_stops = config.planner.recommend_stops,
        "starting route service"
    );

    let state = AppState::load(config.catalog_path.as_deref(), config.planner).map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/search", post(search_handler))
        .route("/api/recommend", post(recommend_handler))
        .route("/api/cities", get(cities_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Turn a body that failed to parse into a 400 problem.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    request_id: &RequestId,
) -> Result<T, ProblemDetails> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!(request_id = %request_id, error = %rejection, "rejected request body");
        ProblemDetails::bad_request(rejection.body_text(), request_id.as_str())
    })
}

/// Handle `POST /api/search`; `null` means nothing fits the budget.
async fn search_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> HandlerResult<Option<ResultBundle>> {
    let request = parse_body(payload, &request_id)?;
    info!(
        request_id = %request_id,
        origin = %request.origin,
        destination = %request.destination,
        budget = request.budget,
        "handling search request"
    );
    request.validate(request_id.as_str()).map_err(|problem| *problem)?;

    let bundle = search_route(
        state.catalog(),
        state.config(),
        &request.origin,
        &request.destination,
        request.budget,
    )
    .map_err(|e| {
        warn!(request_id = %request_id, error = %e, "search failed");
        from_lib_error(&e, request_id.as_str())
    })?;

    match &bundle {
        Some(bundle) => info!(
            request_id = %request_id,
            routes = bundle.all_routes.len(),
            cheapest = bundle.cheapest.total_cost,
            "search complete"
        ),
        None => info!(request_id = %request_id, "no route within budget"),
    }
    Ok(Json(bundle))
}

/// Handle `POST /api/recommend`.
async fn recommend_handler(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> HandlerResult<RecommendResponse> {
    let request = parse_body(payload, &request_id)?;
    info!(
        request_id = %request_id,
        origin = %request.origin,
        budget = request.budget,
        "handling recommend request"
    );
    request.validate(request_id.as_str()).map_err(|problem| *problem)?;

    let recommendations =
        recommend_routes(state.catalog(), state.config(), &request.origin, request.budget)
            .map_err(|e| {
                warn!(request_id = %request_id, error = %e, "recommendation failed");
                from_lib_error(&e, request_id.as_str())
            })?;

    info!(
        request_id = %request_id,
        destinations = recommendations.len(),
        "recommendation complete"
    );
    Ok(Json(RecommendResponse { recommendations }))
}

/// Handle `GET /api/cities`.
async fn cities_handler(State(state): State<AppState>) -> Json<CatalogFile> {
    Json(state.catalog().to_file())
}
