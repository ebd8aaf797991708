use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 지갑 연결 상태
// 역할: 세션 동안의 일시적 캐시 (진실의 원본은 프로필의 hedera_account_id)
// WalletState: transient per-session cache of the connection state
//
// 불변식: is_connected이면 account_id가 반드시 존재
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = WalletState)]
pub struct WalletState {
    /// 연결된 계정 ID (shard.realm.number)
    /// Connected account ID (shard.realm.number)
    #[schema(example = "0.0.1234567")]
    pub account_id: Option<String>,

    /// 연결 여부
    /// Whether a wallet is connected
    pub is_connected: bool,

    /// 연결 작업 진행 중 여부
    /// Whether a connect operation is in flight
    pub is_connecting: bool,
}

impl WalletState {
    /// 세션 시작 상태 (모두 비어 있음)
    /// Session start state (everything empty)
    pub fn disconnected() -> Self {
        Self {
            account_id: None,
            is_connected: false,
            is_connecting: false,
        }
    }

    /// 연결 완료 상태
    /// Connected state
    pub fn connected(account_id: String) -> Self {
        Self {
            account_id: Some(account_id),
            is_connected: true,
            is_connecting: false,
        }
    }
}

/// 수동 연결 요청
/// Manual connect request
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = ManualConnectRequest)]
pub struct ManualConnectRequest {
    /// 사용자가 직접 입력한 계정 ID
    /// Account ID entered by the user
    #[schema(example = "0.0.1234567")]
    pub account_id: String,
}

/// 지갑 연결 응답 (익스텐션/수동 공통)
/// Wallet connect response (extension and manual paths)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ConnectWalletResponse)]
pub struct ConnectWalletResponse {
    pub wallet: WalletState,
    pub message: String,

    /// 프로필 저장 실패 등 비치명적 경고
    /// Non-fatal warning (e.g. profile persistence failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// 지갑 상태 조회 응답
/// Wallet state response
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = WalletStateResponse)]
pub struct WalletStateResponse {
    pub wallet: WalletState,
}
