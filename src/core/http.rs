//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::engine;
use crate::error::EngineError;
use crate::models::allocation::AllocationResult;
use crate::models::portfolio::{PerformanceEstimate, PortfolioPlan};
use crate::models::profile::{AllocationStrategy, MacroStance, RiskProfile, SessionProfile};
use crate::models::signal::{SignalAction, SignalVariant, TechnicalReading};
use crate::services::market_data::{FixtureMarketDataProvider, MarketDataProvider};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub start_time: Arc<Instant>,
    pub provider: Arc<dyn MarketDataProvider>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "folio-advisory-engine"
    })))
}

#[derive(Debug, Serialize, Deserialize)]
struct ResolveAllocationRequest {
    strategy: AllocationStrategy,
    #[serde(rename = "macro")]
    macro_stance: MacroStance,
    risk: RiskProfile,
}

/// Resolve the final allocation for a strategy/macro/risk selection.
async fn resolve_allocation(
    Json(request): Json<ResolveAllocationRequest>,
) -> Json<AllocationResult> {
    let allocation = engine::resolve(request.strategy, request.macro_stance, request.risk);
    Json(allocation)
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoreSignalRequest {
    #[serde(flatten)]
    reading: TechnicalReading,
    #[serde(default)]
    variant: SignalVariant,
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoreSignalResponse {
    score: u8,
    action: SignalAction,
    variant: SignalVariant,
}

/// Score a technical reading with the requested table variant.
async fn score_signal(Json(request): Json<ScoreSignalRequest>) -> Json<ScoreSignalResponse> {
    let score = engine::score_with_variant(&request.reading, request.variant);
    Json(ScoreSignalResponse {
        score,
        action: engine::action_for(score),
        variant: request.variant,
    })
}

#[derive(Debug, Serialize, Deserialize)]
struct EstimatePerformanceRequest {
    allocation: AllocationResult,
    risk: RiskProfile,
    #[serde(rename = "macro")]
    macro_stance: MacroStance,
}

async fn estimate_performance(
    Json(request): Json<EstimatePerformanceRequest>,
) -> Json<PerformanceEstimate> {
    let estimate = engine::estimate(&request.allocation, request.risk, request.macro_stance);
    Json(estimate)
}

#[derive(Debug, Serialize, Deserialize)]
struct BuildPortfolioRequest {
    strategy: AllocationStrategy,
    #[serde(rename = "macro")]
    macro_stance: MacroStance,
    risk: RiskProfile,
    total_assets: f64,
}

/// Compose the full end-of-journey portfolio plan.
async fn build_portfolio(Json(request): Json<BuildPortfolioRequest>) -> Json<PortfolioPlan> {
    let profile = SessionProfile::new(request.risk, request.macro_stance, request.strategy);
    let plan = engine::build_portfolio(&profile, request.total_assets);
    info!(
        strategy = %request.strategy,
        equity_pct = plan.allocation.equity,
        "Portfolio plan built"
    );
    Json(plan)
}

#[derive(Debug, Serialize, Deserialize)]
struct SymbolSignalResponse {
    symbol: String,
    reading: TechnicalReading,
    score: u8,
    action: SignalAction,
}

/// Look up a symbol's readings from the provider and score them.
async fn get_symbol_signal(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<SymbolSignalResponse>, StatusCode> {
    let reading = state
        .provider
        .technical_reading(&symbol)
        .await
        .map_err(|e| match e {
            EngineError::UnknownSymbol(_) => {
                warn!(symbol = %symbol, "No readings for symbol");
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        })?;

    let score = engine::score(&reading);
    Ok(Json(SymbolSignalResponse {
        symbol,
        reading,
        score,
        action: engine::action_for(score),
    }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/allocation/resolve", post(resolve_allocation))
        .route("/api/signal/score", post(score_signal))
        .route("/api/portfolio/estimate", post(estimate_performance))
        .route("/api/portfolio/build", post(build_portfolio))
        .route("/api/signals/{symbol}", get(get_symbol_signal))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        start_time: Arc::new(Instant::now()),
        provider: Arc::new(FixtureMarketDataProvider::new()),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
