// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::Router;

use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::tip::routes::create_tip_router;
use crate::domains::wallet::routes::create_wallet_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/wallet", create_wallet_router())
        .nest("/api/tips", create_tip_router())
}
