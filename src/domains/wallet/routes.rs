// Wallet domain routes
// 지갑 도메인 라우터
use axum::{
    routing::{get, post},
    Router,
};

use crate::domains::wallet::handlers::wallet_handler;
use crate::shared::services::AppState;

/// Create wallet router
/// 지갑 라우터 생성
pub fn create_wallet_router() -> Router<AppState> {
    Router::new()
        .route("/", get(wallet_handler::get_wallet_state))
        .route("/connect", post(wallet_handler::connect_extension))
        .route("/connect/manual", post(wallet_handler::connect_manual))
        .route("/sync", post(wallet_handler::sync_wallet))
}
