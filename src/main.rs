use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tip_server::routes::create_router;
use tip_server::shared::config::AppConfig;
use tip_server::shared::services::AppState;

// Import models for OpenAPI schema
use tip_server::domains::tip::models::*;
use tip_server::domains::wallet::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        tip_server::domains::wallet::handlers::wallet_handler::get_wallet_state,
        tip_server::domains::wallet::handlers::wallet_handler::connect_extension,
        tip_server::domains::wallet::handlers::wallet_handler::connect_manual,
        tip_server::domains::wallet::handlers::wallet_handler::sync_wallet,
        tip_server::domains::tip::handlers::tip_handler::send_tip
    ),
    components(schemas(
        WalletState,
        WalletStateResponse,
        ManualConnectRequest,
        ConnectWalletResponse,
        SendTipRequest,
        SendTipResponse,
        TipStatus
    )),
    tags(
        (name = "Wallet", description = "Wallet connection API endpoints (extension and manual paths)"),
        (name = "Tips", description = "Tip transfer API endpoints")
    ),
    info(
        title = "TipHBAR API Server",
        description = "API server for Hedera wallet connection and micro-tipping",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // 설정 로드
    let config = AppConfig::from_env();

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(&config).expect("Failed to initialize AppState");

    // CORS 설정
    use axum::http::HeaderValue;
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("Invalid CORS origin"),
        )
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    // 서버 시작
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind server address");

    println!("Server running on http://{}", config.bind_addr);
    println!("Swagger UI available at http://{}/docs", config.bind_addr);
    println!("Mirror node: {}", config.mirror_node_url);

    // 서버 실행
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
