//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::FareError;
use crate::planner::JourneyPlanner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/hankyu/stations", get(list_stations))
        .route("/hankyu/calc", get(calc_fare))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn planner(state: &AppState) -> Result<&Arc<JourneyPlanner>, AppError> {
    state.planner.as_ref().ok_or_else(|| AppError::Unavailable {
        message: "fare data is not loaded".to_string(),
    })
}

/// List every known station in sorted order.
async fn list_stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let names = planner(&state)?
        .list_stations()
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();

    Ok(Json(names))
}

/// Price a journey through optional stopovers.
async fn calc_fare(
    State(state): State<AppState>,
    Query(req): Query<CalcRequest>,
) -> Result<Json<CalcResponse>, AppError> {
    let planner = planner(&state)?;

    let result = planner.compute_journey(
        req.start.as_deref().unwrap_or(""),
        &req.stop_list(),
        req.goal.as_deref().unwrap_or(""),
    )?;

    Ok(Json(CalcResponse::from_result(&result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unavailable { message: String },
}

impl From<FareError> for AppError {
    fn from(e: FareError) -> Self {
        let message = e.to_string();
        match e {
            FareError::InvalidInput(_) | FareError::UnknownStation(_) => {
                AppError::BadRequest { message }
            }
            FareError::NoRouteFound { .. } => AppError::NotFound { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        warn!(status = status.as_u16(), error = %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::Station;
    use crate::fare::Tariff;
    use crate::network::{DistanceSource, DistanceTable, LoadMode, MissingEdgePolicy, load_matrix};
    use crate::planner::{PlannerConfig, ResolverKind};

    fn st(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    /// A - B - C line, 2.1 and 2.2 km hops, plus isolated Z.
    fn line_state() -> AppState {
        let stations: Vec<_> = ["A", "B", "C", "Z"].into_iter().map(st).collect();
        let edges = vec![(st("A"), st("B")), (st("B"), st("C"))];
        let mut table = DistanceTable::new();
        table.insert(st("A"), st("B"), 2.1);
        table.insert(st("B"), st("C"), 2.2);
        let source = DistanceSource {
            stations: stations.iter().cloned().collect(),
            table,
        };
        let config = PlannerConfig::new(ResolverKind::Graph, MissingEdgePolicy::Fail, Some(1300));
        let tariff = Tariff::hankyu();
        let planner =
            JourneyPlanner::with_graph(&stations, &edges, &source, &config, tariff).unwrap();

        AppState::new(planner)
    }

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let response = create_router(state).oneshot(request(uri)).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok_without_planner() {
        let response = create_router(AppState::unavailable())
            .oneshot(request("/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn lists_stations_sorted() {
        let (status, body) = get_json(line_state(), "/hankyu/stations").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!(["A", "B", "C", "Z"]));
    }

    #[tokio::test]
    async fn calc_with_stopover() {
        let (status, body) = get_json(line_state(), "/hankyu/calc?start=A&stops=B&goal=C").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["journey_order"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(body["total_distance_km"], 4.3);
        assert_eq!(body["total_fare"], 340);
        assert_eq!(body["details"].as_array().unwrap().len(), 2);
        assert_eq!(body["details"][0]["route"], serde_json::json!(["A", "B"]));
        assert_eq!(body["details"][1]["distance_km"], 2.2);
        assert_eq!(body["pass"]["verdict"], "normal_cheaper");
        assert_eq!(body["pass"]["savings"], 960);
    }

    #[tokio::test]
    async fn calc_without_stops_prices_one_leg() {
        let (status, body) = get_json(line_state(), "/hankyu/calc?start=A&goal=C").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_distance_km"], 4.3);
        assert_eq!(body["total_fare"], 200);
        assert_eq!(
            body["details"][0]["route"],
            serde_json::json!(["A", "B", "C"])
        );
    }

    #[tokio::test]
    async fn empty_stop_segments_are_ignored() {
        let uri = "/hankyu/calc?start=A&stops=,B,,&goal=C";
        let (status, body) = get_json(line_state(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["journey_order"], serde_json::json!(["A", "B", "C"]));
    }

    #[tokio::test]
    async fn missing_goal_is_bad_request() {
        let (status, body) = get_json(line_state(), "/hankyu/calc?start=A").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("goal"));
    }

    #[tokio::test]
    async fn unknown_station_is_bad_request() {
        let (status, body) = get_json(line_state(), "/hankyu/calc?start=Nowhere&goal=C").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown station: Nowhere");
    }

    #[tokio::test]
    async fn unreachable_leg_is_not_found() {
        let (status, body) = get_json(line_state(), "/hankyu/calc?start=A&goal=Z").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no route found from A to Z");
    }

    #[tokio::test]
    async fn fare_endpoints_unavailable_without_planner() {
        for uri in ["/hankyu/stations", "/hankyu/calc?start=A&goal=B"] {
            let (status, body) = get_json(AppState::unavailable(), uri).await;
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert!(body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn calc_on_bundled_network() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/hankyu_kilo.csv");
        let source = load_matrix(path, LoadMode::Directed).unwrap();
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::from_source(source, &config, Tariff::hankyu()).unwrap();

        // 大阪梅田 to 十三
        let (status, body) = get_json(
            AppState::new(planner),
            "/hankyu/calc?start=%E5%A4%A7%E9%98%AA%E6%A2%85%E7%94%B0&goal=%E5%8D%81%E4%B8%89",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["journey_order"],
            serde_json::json!(["大阪梅田", "十三"])
        );
        assert_eq!(body["total_distance_km"], 2.4);
        assert_eq!(body["total_fare"], 170);
        assert_eq!(
            body["details"][0]["route"],
            serde_json::json!(["大阪梅田", "中津", "十三"])
        );
    }
}
