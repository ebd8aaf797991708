// =====================================================
// 지갑 프로바이더 모듈
// Wallet Provider Module
// =====================================================
// 브라우저 익스텐션 지갑 (HashPack 등)에 대한 인터페이스를 제공합니다.
//
// 설계 철학:
// - 인터페이스와 구현 분리 (Dependency Inversion)
// - Service는 trait만 참조 (구체적 구현 몰라도 됨)
// - 익스텐션 부재는 에러가 아닌 정상 상태 (Unavailable 변형으로 표현)
// =====================================================

pub mod mock;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::wallet::models::TransferInstruction;

pub use mock::MockProvider;

/// 익스텐션 연결 시 전달하는 앱 메타데이터
/// App metadata sent on extension connect
#[derive(Debug, Clone)]
pub struct AppMetadata {
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "TipHBAR".to_string(),
            description: "Micro-tipping platform for creators".to_string(),
            icon: "https://absolute.url/to/icon.png".to_string(),
        }
    }
}

/// 연결 요청 결과 (익스텐션 경계의 명시적 태그 타입)
/// Connect result (explicit tagged type at the extension boundary)
#[derive(Debug, Clone)]
pub struct ConnectResponse {
    pub success: bool,

    /// 허용된 계정 ID 목록 (첫 번째를 사용)
    /// Granted account IDs (the first one is used)
    pub account_ids: Vec<String>,
}

/// 서명/제출 요청 결과
/// Sign-and-submit result
#[derive(Debug, Clone)]
pub struct SubmitResponse {
    pub success: bool,

    /// 네트워크가 부여한 트랜잭션 ID (성공 시)
    /// Network-assigned transaction ID (on success)
    pub transaction_id: Option<String>,
}

/// 지갑 익스텐션 인터페이스
/// Wallet extension interface
///
/// 연결 요청과 전송 서명/제출, 두 가지 능력만 노출합니다.
/// 익스텐션은 단일 세션으로 가정하므로 호출자는 제출을 직렬화해야 합니다.
///
/// # 구현체
/// - `MockProvider`: 테스트용
/// - 실제 브라우저 익스텐션 브리지 (프론트엔드 측)
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// 연결 요청
    /// Request a connection with app metadata
    async fn connect(&self, metadata: &AppMetadata) -> Result<ConnectResponse>;

    /// 전송 지시 서명 및 제출
    /// Sign and submit a transfer instruction
    async fn sign_and_submit(&self, instruction: &TransferInstruction) -> Result<SubmitResponse>;
}

/// 런타임에 주입되는 프로바이더 핸들
/// Provider handle injected at runtime
///
/// 익스텐션이 없는 환경에서는 Unavailable이며, 이는 정상적인 상태입니다.
#[derive(Clone)]
pub enum WalletProviderHandle {
    Available(Arc<dyn WalletProvider>),
    Unavailable,
}

impl WalletProviderHandle {
    /// 사용 가능한 프로바이더 반환 (없으면 None)
    /// Returns the provider if available
    pub fn get(&self) -> Option<Arc<dyn WalletProvider>> {
        match self {
            Self::Available(provider) => Some(provider.clone()),
            Self::Unavailable => None,
        }
    }
}
