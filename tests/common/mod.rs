// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 가짜 컴포넌트와 셋업 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let harness = setup(Some(MockProvider::connected(TEST_ACCOUNT_ID)), LedgerMode::Found);
//     // 테스트 코드...
// }
// ```
// =====================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

use tip_server::domains::wallet::models::AccountId;
use tip_server::domains::wallet::provider::{MockProvider, WalletProviderHandle};
use tip_server::shared::clients::{AccountLookup, InMemoryIdentityStore, LedgerQuery};
use tip_server::shared::config::AppConfig;
use tip_server::shared::services::{AppState, Notification, Notifier};

// 테스트용 상수
pub const TEST_USER_ID: &str = "user-1";
pub const TEST_ACCOUNT_ID: &str = "0.0.1234567";
pub const RECIPIENT_USER_ID: &str = "user-2";
pub const RECIPIENT_ACCOUNT_ID: &str = "0.0.7654321";

/// 원장 조회 시나리오
/// Ledger lookup scenario
#[derive(Debug, Clone, Copy)]
pub enum LedgerMode {
    /// 계정 존재
    Found,
    /// 계정 없음 (응답은 정상)
    NotFound,
    /// 조회 자체가 실패 (전송 에러)
    Error,
}

/// 스크립트된 원장 조회 (호출 횟수 기록)
/// Scripted ledger query (records call count)
pub struct ScriptedLedger {
    mode: LedgerMode,
    calls: AtomicUsize,
}

impl ScriptedLedger {
    pub fn new(mode: LedgerMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    /// lookup_account 호출 횟수
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerQuery for ScriptedLedger {
    async fn lookup_account(&self, _account_id: &AccountId) -> Result<AccountLookup> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            LedgerMode::Found => Ok(AccountLookup::Found),
            LedgerMode::NotFound => Ok(AccountLookup::NotFound),
            LedgerMode::Error => bail!("ScriptedLedger: lookup failed"),
        }
    }
}

/// 알림 수집기 (발행된 토스트를 순서대로 보관)
/// Collecting notifier (stores emitted toasts in order)
#[derive(Default)]
pub struct CollectingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    /// 발행된 알림 제목 목록
    pub fn titles(&self) -> Vec<String> {
        self.notifications
            .lock()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    /// 발행된 알림 전체
    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}

/// 테스트 하네스: AppState와 주입된 가짜 컴포넌트들
/// Test harness: AppState plus the injected fakes
pub struct TestHarness {
    pub app_state: AppState,
    pub provider: Option<Arc<MockProvider>>,
    pub ledger: Arc<ScriptedLedger>,
    pub identity: Arc<InMemoryIdentityStore>,
    pub notifier: Arc<CollectingNotifier>,
}

/// 테스트 셋업: 가짜 컴포넌트로 AppState를 구성
/// Test setup: assemble AppState from fakes
pub fn setup(provider: Option<MockProvider>, ledger_mode: LedgerMode) -> TestHarness {
    setup_with_timeout(provider, ledger_mode, 5)
}

/// 익스텐션 타임아웃을 지정하는 셋업 (타임아웃 만료 테스트용)
/// Setup with an explicit extension timeout (for expiry tests)
pub fn setup_with_timeout(
    provider: Option<MockProvider>,
    ledger_mode: LedgerMode,
    extension_timeout_secs: u64,
) -> TestHarness {
    let provider = provider.map(Arc::new);
    let handle = match &provider {
        Some(p) => WalletProviderHandle::Available(p.clone()),
        None => WalletProviderHandle::Unavailable,
    };

    let ledger = Arc::new(ScriptedLedger::new(ledger_mode));
    let identity = Arc::new(InMemoryIdentityStore::with_user(TEST_USER_ID));
    let notifier = Arc::new(CollectingNotifier::default());

    let config = AppConfig {
        extension_timeout_secs,
        ..AppConfig::default()
    };

    let app_state = AppState::with_components(
        handle,
        ledger.clone(),
        identity.clone(),
        notifier.clone(),
        &config,
    );

    TestHarness {
        app_state,
        provider,
        ledger,
        identity,
        notifier,
    }
}

impl TestHarness {
    /// 프로필 동기화로 지갑을 연결 상태로 만듦
    /// Bring the wallet to Connected via profile sync
    pub async fn connect_via_sync(&self, account_id: &str) {
        self.identity.link(TEST_USER_ID, account_id);
        let state = self
            .app_state
            .wallet_state
            .wallet_service
            .sync_with_profile()
            .await
            .expect("sync_with_profile should succeed");
        assert!(state.is_connected, "wallet should be connected after sync");
    }
}
