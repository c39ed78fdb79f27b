//! REST API server binary.
//!
//! Serves the curated review collection with parsed sections, plus rendered
//! markdown cards, behind a small axum router with OpenAPI/Swagger UI.

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_rest::dto::{CardRes, HealthRes, ListReviewsRes, ReviewRes};
use praxis_core::{
    config::resolve_reviews_path, segment, CardRenderer, CoreConfig, ReviewCatalog, ReviewError,
};

/// Application state for the REST API server
///
/// The catalog is loaded once at startup; requests only read from it.
#[derive(Clone)]
struct AppState {
    catalog: Arc<ReviewCatalog>,
    renderer: CardRenderer,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_reviews, get_review, get_review_card),
    components(schemas(
        HealthRes,
        ListReviewsRes,
        ReviewRes,
        CardRes,
        api_rest::dto::SectionsRes,
    ))
)]
struct ApiDoc;

/// Main entry point for the review REST API server
///
/// # Environment Variables
/// - `PRAXIS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `PRAXIS_REVIEWS_PATH`: Review collection file (default: data/reviews.json
///   found relative to the working directory or the workspace root)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the review collection cannot be located or parsed, or
/// - the server address cannot be bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("praxis_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("PRAXIS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting review REST API on {}", addr);

    let reviews_override = std::env::var("PRAXIS_REVIEWS_PATH").ok().map(PathBuf::from);
    let reviews_path = resolve_reviews_path(reviews_override)?;
    let cfg = CoreConfig::new(reviews_path)?;
    let catalog = ReviewCatalog::load(&cfg)?;

    let state = AppState {
        catalog: Arc::new(catalog),
        renderer: CardRenderer::new(),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/reviews", get(list_reviews))
        .route("/reviews/:id", get(get_review))
        .route("/reviews/:id/card", get(get_review_card))
        .merge(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "review REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/reviews",
    responses(
        (status = 200, description = "All reviews with parsed sections", body = ListReviewsRes)
    )
)]
/// List the full review collection
///
/// Every record is returned together with its parsed sections; segmentation
/// runs fresh on each request, which is cheap and idempotent.
#[axum::debug_handler]
async fn list_reviews(State(state): State<AppState>) -> Json<ListReviewsRes> {
    let reviews = state
        .catalog
        .list()
        .iter()
        .map(ReviewRes::from_record)
        .collect();
    Json(ListReviewsRes { reviews })
}

#[utoipa::path(
    get,
    path = "/reviews/{id}",
    responses(
        (status = 200, description = "One review with parsed sections", body = ReviewRes),
        (status = 404, description = "No review with that id")
    )
)]
/// Fetch one review by id
///
/// # Errors
/// Returns `404 Not Found` if no review carries the requested id.
#[axum::debug_handler]
async fn get_review(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<u32>,
) -> Result<Json<ReviewRes>, (StatusCode, &'static str)> {
    match state.catalog.get(id) {
        Ok(record) => Ok(Json(ReviewRes::from_record(record))),
        Err(ReviewError::UnknownReview(_)) => Err((StatusCode::NOT_FOUND, "No such review")),
        Err(e) => {
            tracing::error!("Get review error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/reviews/{id}/card",
    responses(
        (status = 200, description = "Rendered markdown card", body = CardRes),
        (status = 404, description = "No review with that id")
    )
)]
/// Fetch one review rendered as a markdown card
///
/// # Errors
/// Returns `404 Not Found` if no review carries the requested id.
#[axum::debug_handler]
async fn get_review_card(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<u32>,
) -> Result<Json<CardRes>, (StatusCode, &'static str)> {
    match state.catalog.get(id) {
        Ok(record) => {
            let parsed = segment(&record.full_text);
            let card = state.renderer.card_render(record, &parsed);
            Ok(Json(CardRes { id, card }))
        }
        Err(ReviewError::UnknownReview(_)) => Err((StatusCode::NOT_FOUND, "No such review")),
        Err(e) => {
            tracing::error!("Get review card error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}
