use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

/// 지갑 연결 관련 에러
/// Wallet connection errors
#[derive(Error, Debug)]
pub enum WalletError {
    /// 지갑 익스텐션이 설치되어 있지 않음 (정상적인 상황, 수동 연결로 대체 가능)
    /// Wallet extension is not installed (expected condition, manual connect available)
    #[error("Wallet extension not available")]
    WalletUnavailable,

    /// 익스텐션은 있지만 연결이 거부되거나 실패함
    /// Extension present but the connection was rejected or errored
    #[error("Wallet connection failed: {0}")]
    ConnectionFailed(String),

    /// 계정 ID 형식이 잘못됨 (네트워크 호출 전에 검출)
    /// Malformed account ID (detected before any network call)
    #[error("Invalid account ID format: {input}")]
    InvalidAccountFormat { input: String },

    /// 형식은 맞지만 네트워크에 존재하지 않는 계정
    /// Well-formed account that does not exist on the network
    #[error("Account not found on the network: {account_id}")]
    AccountNotFound { account_id: String },

    /// 존재 확인 또는 프로필 호출이 완료되지 못함
    /// Existence check or profile call could not complete
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 다른 지갑 작업이 이미 진행 중
    /// Another wallet operation is already in flight
    #[error("Another wallet operation is in progress")]
    Busy,
}

/// WalletError를 HTTP 응답으로 변환
impl From<WalletError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: WalletError) -> Self {
        let (status, message) = match &err {
            WalletError::WalletUnavailable => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
            WalletError::ConnectionFailed(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
            WalletError::InvalidAccountFormat { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            WalletError::AccountNotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
            WalletError::NetworkError(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
            WalletError::Busy => (StatusCode::CONFLICT, err.to_string()),
        };

        (status, Json(json!({ "error": message })))
    }
}
