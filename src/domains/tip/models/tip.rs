use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 팁 기록 상태
/// Tip record status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TipStatus {
    Pending,
    Completed,
    Failed,
}

// 오프체인 팁 기록 (tips 테이블에 저장되는 행)
// 역할: NestJS의 DTO/Entity 같은 것
// NewTip: off-chain tip record mirroring an on-chain transfer
//
// 불변식: status가 completed이면 transaction_id는 실제 제출이 반환한 ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTip {
    /// 수신자 사용자 ID (프로필 키)
    /// Recipient user ID (profile key)
    pub to_user_id: String,

    /// 팁 금액 (HBAR, 양수)
    /// Tip amount (HBAR, positive)
    pub amount: Decimal,

    /// 온체인 트랜잭션 ID
    /// On-chain transaction ID
    pub transaction_id: String,

    pub status: TipStatus,

    /// 첨부 메시지
    /// Attached message
    pub message: Option<String>,
}

/// 팁 전송 요청
/// Send tip request
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = SendTipRequest)]
pub struct SendTipRequest {
    /// 수신 계정 ID
    /// Recipient account ID
    #[schema(example = "0.0.7654321")]
    pub to_account_id: String,

    /// 팁 금액 (HBAR)
    /// Tip amount (HBAR)
    #[schema(value_type = String, example = "5")]
    pub amount: Decimal,

    /// 첨부 메시지 (선택)
    /// Attached message (optional)
    pub message: Option<String>,
}

/// 팁 전송 응답
/// Send tip response
///
/// 전송이 성공하면 기록 실패 여부와 무관하게 트랜잭션 ID를 반환합니다.
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = SendTipResponse)]
pub struct SendTipResponse {
    /// 온체인 트랜잭션 ID
    /// On-chain transaction ID
    pub transaction_id: String,

    /// 오프체인 기록 성공 여부
    /// Whether the off-chain record was written
    pub recorded: bool,

    pub message: String,

    /// 기록 실패/수신자 미해결 경고 (비치명적)
    /// Recording-failure / unresolved-recipient warning (non-fatal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
