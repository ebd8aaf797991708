// Wallet domain state
// 지갑 도메인 상태
use crate::domains::wallet::services::WalletService;

/// Wallet domain state
/// 지갑 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct WalletDomainState {
    pub wallet_service: WalletService,
}

impl WalletDomainState {
    /// Create WalletDomainState
    /// WalletDomainState 생성
    pub fn new(wallet_service: WalletService) -> Self {
        Self { wallet_service }
    }
}
