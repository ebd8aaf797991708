use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use crate::domains::tip::services::{TipDomainState, TipService, TransferService};
use crate::domains::wallet::provider::WalletProviderHandle;
use crate::domains::wallet::services::{AccountVerifier, WalletDomainState, WalletService};
use crate::shared::clients::{IdentityStore, LedgerQuery, MirrorNodeClient, SupabaseIdentityClient};
use crate::shared::config::AppConfig;
use crate::shared::services::{Notifier, StdoutNotifier};

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 역할: NestJS의 Module에서 모든 Service를 주입하는 것과 유사
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리
#[derive(Clone)]
pub struct AppState {
    pub wallet_state: WalletDomainState,
    pub tip_state: TipDomainState,
}

impl AppState {
    /// Create AppState from configuration (production wiring)
    /// 설정으로 AppState 생성 (운영 구성)
    ///
    /// 익스텐션 브리지는 서버 프로세스에 주입되지 않으므로 기본은
    /// Unavailable이며, 이는 정상적인 상태입니다 (수동 연결 경로 사용).
    pub fn new(config: &AppConfig) -> Result<Self> {
        let ledger: Arc<dyn LedgerQuery> = Arc::new(MirrorNodeClient::new(
            &config.mirror_node_url,
            config.http_timeout(),
        )?);

        let identity: Arc<dyn IdentityStore> = Arc::new(SupabaseIdentityClient::new(
            &config.supabase_url,
            &config.supabase_anon_key,
            &config.supabase_user_token,
            config.http_timeout(),
        )?);

        let notifier: Arc<dyn Notifier> = Arc::new(StdoutNotifier);

        Ok(Self::with_components(
            WalletProviderHandle::Unavailable,
            ledger,
            identity,
            notifier,
            config,
        ))
    }

    /// Create AppState with injected components (tests, alternative wiring)
    /// 주입된 컴포넌트로 AppState 생성 (테스트 및 대체 구성)
    pub fn with_components(
        provider: WalletProviderHandle,
        ledger: Arc<dyn LedgerQuery>,
        identity: Arc<dyn IdentityStore>,
        notifier: Arc<dyn Notifier>,
        config: &AppConfig,
    ) -> Self {
        // 1. 공유 작업 락 (지갑당 connect/submit 단일 비행)
        // Shared operation lock (single flight for connect/submit per wallet)
        let op_lock = Arc::new(Mutex::new(()));

        // 2. 각 도메인 서비스 생성
        // Build the domain services
        let verifier = AccountVerifier::new(ledger);
        let wallet_service = WalletService::new(
            provider.clone(),
            verifier,
            identity.clone(),
            notifier.clone(),
            op_lock.clone(),
            config.extension_timeout(),
        );
        let transfer_service = TransferService::new(provider, config.extension_timeout());
        let tip_service = TipService::new(
            wallet_service.clone(),
            transfer_service,
            identity,
            notifier,
            op_lock,
        );

        // 3. AppState 조합
        Self {
            wallet_state: WalletDomainState::new(wallet_service),
            tip_state: TipDomainState::new(tip_service),
        }
    }
}
