// Tip domain state
// 팁 도메인 상태
use crate::domains::tip::services::TipService;

/// Tip domain state
/// 팁 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct TipDomainState {
    pub tip_service: TipService,
}

impl TipDomainState {
    /// Create TipDomainState
    /// TipDomainState 생성
    pub fn new(tip_service: TipService) -> Self {
        Self { tip_service }
    }
}
