// Tip domain routes
// 팁 도메인 라우터
use axum::{routing::post, Router};

use crate::domains::tip::handlers::tip_handler;
use crate::shared::services::AppState;

/// Create tip router
/// 팁 라우터 생성
pub fn create_tip_router() -> Router<AppState> {
    Router::new().route("/", post(tip_handler::send_tip))
}
