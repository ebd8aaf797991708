use axum::{extract::State, http::StatusCode, Json};

use crate::domains::tip::models::{SendTipRequest, SendTipResponse};
use crate::domains::tip::services::RecordOutcome;
use crate::shared::errors::TipError;
use crate::shared::services::AppState;

/// 팁 전송 핸들러
/// Send tip handler
///
/// 전송이 수락되면 오프체인 기록이 실패해도 200과 트랜잭션 ID를 반환하고,
/// 기록 실패는 응답의 warning 필드로 전달됩니다.
#[utoipa::path(
    post,
    path = "/api/tips",
    request_body = SendTipRequest,
    responses(
        (status = 200, description = "Tip sent successfully", body = SendTipResponse),
        (status = 400, description = "Bad request (not connected, invalid amount or recipient)"),
        (status = 409, description = "Another tip is in progress"),
        (status = 502, description = "Transaction rejected or errored")
    ),
    tag = "Tips"
)]
pub async fn send_tip(
    State(app_state): State<AppState>,
    Json(request): Json<SendTipRequest>,
) -> Result<Json<SendTipResponse>, (StatusCode, Json<serde_json::Value>)> {
    let outcome = app_state
        .tip_state
        .tip_service
        .send_tip(
            &request.to_account_id,
            request.amount,
            request.message.as_deref(),
        )
        .await
        .map_err(|e: TipError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    let (recorded, warning) = match outcome.record {
        RecordOutcome::Recorded => (true, None),
        RecordOutcome::RecipientUnresolved => (
            false,
            Some("Recipient has no profile; tip was not recorded off-chain".to_string()),
        ),
        RecordOutcome::Failed(reason) => (false, Some(format!("Failed to record tip: {}", reason))),
    };

    Ok(Json(SendTipResponse {
        transaction_id: outcome.transaction_id,
        recorded,
        message: "Tip sent successfully".to_string(),
        warning,
    }))
}
