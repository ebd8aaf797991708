use axum::{http::StatusCode, Json};
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

/// 팁 전송 관련 에러
/// Tip transfer errors
#[derive(Error, Debug)]
pub enum TipError {
    /// 지갑이 연결되어 있지 않음 (전송 전에 검출)
    /// Wallet not connected (detected before any submission)
    #[error("Wallet not connected")]
    NotConnected,

    /// 팁 금액이 0 이하
    /// Tip amount is zero or negative
    #[error("Tip amount must be greater than zero: {amount}")]
    InvalidAmount { amount: Decimal },

    /// 수신 계정 ID 형식이 잘못됨
    /// Malformed recipient account ID
    #[error("Invalid recipient account ID: {input}")]
    InvalidRecipient { input: String },

    /// 서명/제출이 거부되거나 실패함 (오프체인 기록은 시도하지 않음)
    /// Signing/submission rejected or errored (no off-chain write attempted)
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// 전송은 성공했지만 수신자 프로필을 찾지 못함
    /// Transfer succeeded but no profile matches the recipient account
    #[error("No profile matches recipient account: {account_id}")]
    RecipientUnresolved { account_id: String },

    /// 전송은 성공했지만 오프체인 기록 저장이 실패함
    /// Transfer succeeded but the off-chain record could not be written
    #[error("Failed to record tip: {0}")]
    RecordingFailed(String),

    /// 같은 지갑으로 다른 전송이 이미 진행 중
    /// Another submission is already in flight for this wallet
    #[error("Another tip is in progress")]
    Busy,
}

/// TipError를 HTTP 응답으로 변환
///
/// RecipientUnresolved / RecordingFailed는 보통 에러 응답이 아니라
/// 성공 응답의 경고 필드로 전달됩니다 (전송 자체는 성공했으므로).
impl From<TipError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: TipError) -> Self {
        let (status, message) = match &err {
            TipError::NotConnected => (StatusCode::BAD_REQUEST, err.to_string()),
            TipError::InvalidAmount { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
            TipError::InvalidRecipient { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
            TipError::TransactionFailed(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
            TipError::RecipientUnresolved { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            TipError::RecordingFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            TipError::Busy => (StatusCode::CONFLICT, err.to_string()),
        };

        (status, Json(json!({ "error": message })))
    }
}
