//! API Router with Swagger UI

use axum::{
    extract::FromRef,
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::modules::health::{self, HealthState};
use super::modules::metrics::{self, http_metrics_middleware, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::users::{self, UserHandlerState};

/// Unified state for every API route.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone, Default)]
pub struct ApiState {
    pub users: UserHandlerState,
    pub health: HealthState,
    /// `None` disables `GET /metrics`.
    pub metrics: Option<MetricsState>,
}

impl ApiState {
    pub fn new(users: UserHandlerState, prometheus: Option<PrometheusHandle>) -> Self {
        Self {
            users,
            health: HealthState::default(),
            metrics: prometheus.map(|handle| MetricsState { handle }),
        }
    }
}

impl FromRef<ApiState> for UserHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        s.users.clone()
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        s.health.clone()
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::patch_user,
        users::delete_user,
    ),
    components(
        schemas(
            health::HealthResponse,
            users::UserDto,
            users::UserPayload,
            users::PatchUserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Users", description = "Sample user resource: list, get, create, replace, patch, delete"),
    ),
    info(
        title = "Sample Users REST API",
        version = "1.0.0",
        description = "Template REST API exposing CRUD endpoints over hardcoded sample users",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
        .with_state(state.users.clone());

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        .with_state(state.health.clone())
        // Users
        .nest("/users", user_routes);

    if let Some(metrics_state) = state.metrics {
        router = router.route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        );
    }

    router
        // Middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};

    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;

    async fn send(req: Request<Body>) -> Response<Body> {
        use tower::Service;
        let mut svc = create_api_router(ApiState::default()).into_service();
        svc.call(req).await.unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(resp: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let resp = send(get("/health")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn openapi_document_lists_user_paths() {
        let resp = send(get("/api-doc/openapi.json")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        let paths = body["paths"].as_object().unwrap();
        assert!(paths.contains_key("/users"));
        assert!(paths.contains_key("/users/{id}"));
        for method in ["get", "put", "patch", "delete"] {
            assert!(paths["/users/{id}"].get(method).is_some(), "{method}");
        }
    }

    #[tokio::test]
    async fn request_id_is_generated_and_echoed() {
        let resp = send(get("/health")).await;
        let generated = resp.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());

        let req = Request::builder()
            .uri("/users")
            .header(REQUEST_ID_HEADER, "trace-me")
            .body(Body::empty())
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "trace-me");
    }

    #[tokio::test]
    async fn metrics_route_absent_without_recorder() {
        let resp = send(get("/metrics")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unsupported_method_is_rejected() {
        let req = Request::builder()
            .method("DELETE")
            .uri("/users")
            .body(Body::empty())
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
