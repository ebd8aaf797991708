use axum::{extract::State, http::StatusCode, Json};

use crate::domains::wallet::models::{
    ConnectWalletResponse, ManualConnectRequest, WalletStateResponse,
};
use crate::shared::errors::WalletError;
use crate::shared::services::AppState;

/// 지갑 상태 조회 핸들러
/// Get wallet state handler
#[utoipa::path(
    get,
    path = "/api/wallet",
    responses(
        (status = 200, description = "Wallet state retrieved successfully", body = WalletStateResponse)
    ),
    tag = "Wallet"
)]
pub async fn get_wallet_state(State(app_state): State<AppState>) -> Json<WalletStateResponse> {
    let wallet = app_state.wallet_state.wallet_service.state();
    Json(WalletStateResponse { wallet })
}

/// 익스텐션 연결 핸들러
/// Connect via extension handler
#[utoipa::path(
    post,
    path = "/api/wallet/connect",
    responses(
        (status = 200, description = "Wallet connected successfully", body = ConnectWalletResponse),
        (status = 409, description = "Another wallet operation is in progress"),
        (status = 502, description = "Connection rejected or errored"),
        (status = 503, description = "Wallet extension not available")
    ),
    tag = "Wallet"
)]
pub async fn connect_extension(
    State(app_state): State<AppState>,
) -> Result<Json<ConnectWalletResponse>, (StatusCode, Json<serde_json::Value>)> {
    let outcome = app_state
        .wallet_state
        .wallet_service
        .connect_via_extension()
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(ConnectWalletResponse {
        wallet: outcome.state,
        message: "Wallet connected successfully".to_string(),
        warning: outcome.persist_warning,
    }))
}

/// 수동 연결 핸들러
/// Manual connect handler
#[utoipa::path(
    post,
    path = "/api/wallet/connect/manual",
    request_body = ManualConnectRequest,
    responses(
        (status = 200, description = "Wallet connected successfully", body = ConnectWalletResponse),
        (status = 400, description = "Invalid account ID format"),
        (status = 404, description = "Account not found on the network"),
        (status = 409, description = "Another wallet operation is in progress"),
        (status = 502, description = "Network error during verification")
    ),
    tag = "Wallet"
)]
pub async fn connect_manual(
    State(app_state): State<AppState>,
    Json(request): Json<ManualConnectRequest>,
) -> Result<Json<ConnectWalletResponse>, (StatusCode, Json<serde_json::Value>)> {
    let outcome = app_state
        .wallet_state
        .wallet_service
        .connect_manually(&request.account_id)
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(ConnectWalletResponse {
        wallet: outcome.state,
        message: "Wallet connected successfully".to_string(),
        warning: outcome.persist_warning,
    }))
}

/// 프로필 동기화 핸들러 (세션 시작 시 호출)
/// Sync with profile handler (called at session start)
#[utoipa::path(
    post,
    path = "/api/wallet/sync",
    responses(
        (status = 200, description = "Wallet state synced with profile", body = WalletStateResponse),
        (status = 502, description = "Identity service unreachable")
    ),
    tag = "Wallet"
)]
pub async fn sync_wallet(
    State(app_state): State<AppState>,
) -> Result<Json<WalletStateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let wallet = app_state
        .wallet_state
        .wallet_service
        .sync_with_profile()
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(WalletStateResponse { wallet }))
}
