use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::domains::wallet::models::WalletState;
use crate::domains::wallet::provider::{AppMetadata, WalletProviderHandle};
use crate::domains::wallet::services::AccountVerifier;
use crate::shared::clients::IdentityStore;
use crate::shared::errors::WalletError;
use crate::shared::services::{Notification, Notifier};

/// 연결 성공 결과
/// Successful connect outcome
///
/// 프로필 저장이 실패해도 연결은 유지되므로, 실패는 경고로 따로 전달됩니다.
#[derive(Debug, Clone)]
pub struct ConnectOutcome {
    pub state: WalletState,
    pub persist_warning: Option<String>,
}

// 지갑 연결 서비스
// 역할: NestJS의 Service 같은 것
// WalletService: owns the connection state machine
//
// 상태 전이: Disconnected → Connecting → Connected, 실패 시 Disconnected.
// 두 연결 경로 (익스텐션 / 수동 입력+검증)가 하나의 상태 머신으로 수렴하므로,
// 소비자는 어느 경로로 연결됐는지 몰라도 is_connected/account_id만 보면 됩니다.
//
// WalletState의 쓰기는 이 서비스만 수행합니다. connect/submit 작업은
// op_lock으로 직렬화됩니다 (동시 호출은 Busy로 거절).
#[derive(Clone)]
pub struct WalletService {
    state: Arc<RwLock<WalletState>>,
    op_lock: Arc<Mutex<()>>,
    provider: WalletProviderHandle,
    verifier: AccountVerifier,
    identity: Arc<dyn IdentityStore>,
    notifier: Arc<dyn Notifier>,
    extension_timeout: Duration,
}

impl WalletService {
    /// 생성자
    /// Constructor
    pub fn new(
        provider: WalletProviderHandle,
        verifier: AccountVerifier,
        identity: Arc<dyn IdentityStore>,
        notifier: Arc<dyn Notifier>,
        op_lock: Arc<Mutex<()>>,
        extension_timeout: Duration,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(WalletState::disconnected())),
            op_lock,
            provider,
            verifier,
            identity,
            notifier,
            extension_timeout,
        }
    }

    /// 현재 지갑 상태 스냅샷
    /// Snapshot of the current wallet state
    pub fn state(&self) -> WalletState {
        self.state.read().clone()
    }

    /// 연결된 계정 ID (연결되어 있을 때만 Some)
    /// Connected account ID (Some only while connected)
    pub fn connected_account(&self) -> Option<String> {
        let state = self.state.read();
        if state.is_connected {
            state.account_id.clone()
        } else {
            None
        }
    }

    /// 익스텐션을 통한 연결
    /// Connect via the wallet extension
    ///
    /// 익스텐션이 없으면 어떤 서비스에도 접근하지 않고 WalletUnavailable로
    /// 실패합니다. 성공 시 계정 ID를 프로필에 저장하는데, 저장 실패는
    /// 연결을 되돌리지 않고 경고로만 전달됩니다 (best-effort).
    pub async fn connect_via_extension(&self) -> Result<ConnectOutcome, WalletError> {
        // 동시 연결 시도는 거절
        let _guard = self
            .op_lock
            .clone()
            .try_lock_owned()
            .map_err(|_| WalletError::Busy)?;

        self.set_connecting();

        // 1. 익스텐션 존재 확인
        // Check the extension capability is present
        let provider = match self.provider.get() {
            Some(provider) => provider,
            None => {
                self.set_disconnected();
                self.notifier.notify(Notification::error(
                    "Wallet Not Found",
                    "Please install HashPack wallet extension or use manual connection"
                        .to_string(),
                ));
                return Err(WalletError::WalletUnavailable);
            }
        };

        // 2. 연결 요청 (타임아웃 포함)
        // Request connection with app metadata (bounded timeout)
        let response = match timeout(
            self.extension_timeout,
            provider.connect(&AppMetadata::default()),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(self.fail_connect(WalletError::ConnectionFailed(e.to_string()))),
            Err(_) => {
                return Err(self.fail_connect(WalletError::ConnectionFailed(
                    "extension call timed out".to_string(),
                )))
            }
        };

        // 3. 결과 확인: 첫 번째 계정 사용
        // Check the result: take the first granted account
        if !response.success {
            return Err(self.fail_connect(WalletError::ConnectionFailed(
                "connection rejected by wallet".to_string(),
            )));
        }
        let account_id = match response.account_ids.first() {
            Some(account_id) => account_id.clone(),
            None => {
                return Err(self.fail_connect(WalletError::ConnectionFailed(
                    "wallet granted no accounts".to_string(),
                )))
            }
        };

        // 4. 프로필 저장 (best-effort) 후 Connected로 전이
        // Persist to the profile (best-effort), then transition to Connected
        let persist_warning = self.persist_linked_account(&account_id).await;
        self.finish_connect(account_id, persist_warning)
    }

    /// 수동 입력 계정으로 연결
    /// Connect with a manually entered account ID
    ///
    /// 문법 검사 → 미러 노드 존재 확인 → 프로필 저장 → Connected.
    /// 문법 오류는 네트워크 호출 없이 실패합니다.
    pub async fn connect_manually(&self, candidate: &str) -> Result<ConnectOutcome, WalletError> {
        let _guard = self
            .op_lock
            .clone()
            .try_lock_owned()
            .map_err(|_| WalletError::Busy)?;

        self.set_connecting();

        // 1. 검증 (문법 검사가 먼저, 실패 시 Disconnected로 복귀)
        // Verify (syntax first; any failure returns to Disconnected)
        let account_id = match self.verifier.verify(candidate).await {
            Ok(account_id) => account_id,
            Err(err) => return Err(self.fail_connect(err)),
        };

        // 2. 프로필 저장 (best-effort) 후 Connected로 전이 (익스텐션 경로와 동일)
        // Persist (best-effort), then Connected — exactly as the extension path
        let account_id = account_id.to_string();
        let persist_warning = self.persist_linked_account(&account_id).await;
        self.finish_connect(account_id, persist_warning)
    }

    /// 프로필과 동기화 (세션 시작 시 1회 호출)
    /// Sync with the identity profile (called once at session start)
    ///
    /// 멱등: 프로필에 연결된 계정이 있으면 재검증 없이 Connected로 설정하고,
    /// 이미 Connected인 상태를 절대 되돌리지 않습니다. 연결 경로와 경쟁하지
    /// 않도록 같은 op_lock을 기다립니다 (거절 대신 대기).
    pub async fn sync_with_profile(&self) -> Result<WalletState, WalletError> {
        let _guard = self.op_lock.lock().await;

        // 이미 연결되어 있으면 아무것도 하지 않음
        if self.state.read().is_connected {
            return Ok(self.state());
        }

        let user_id = self
            .identity
            .current_user()
            .await
            .map_err(|e| WalletError::NetworkError(e.to_string()))?;

        if let Some(user_id) = user_id {
            let linked = self
                .identity
                .get_linked_account(&user_id)
                .await
                .map_err(|e| WalletError::NetworkError(e.to_string()))?;

            if let Some(account_id) = linked {
                *self.state.write() = WalletState::connected(account_id);
            }
        }

        Ok(self.state())
    }

    // ── 내부 헬퍼 ──────────────────────────────────────

    /// Connecting 상태로 전이 (기존 연결 정보는 유지)
    fn set_connecting(&self) {
        self.state.write().is_connecting = true;
    }

    /// Disconnected 상태로 전이
    fn set_disconnected(&self) {
        *self.state.write() = WalletState::disconnected();
    }

    /// 연결 실패 처리: Disconnected로 전이하고 알림 한 건 발행
    /// Handle a connect failure: transition to Disconnected, emit one toast
    fn fail_connect(&self, err: WalletError) -> WalletError {
        self.set_disconnected();
        self.notify_connect_failure(&err);
        err
    }

    /// 연결 성공 처리: Connected로 전이, 성공 알림 + 저장 경고 알림
    /// Handle a connect success: transition to Connected, success toast
    /// plus a separate warning toast if persistence failed
    fn finish_connect(
        &self,
        account_id: String,
        persist_warning: Option<String>,
    ) -> Result<ConnectOutcome, WalletError> {
        *self.state.write() = WalletState::connected(account_id.clone());

        self.notifier.notify(Notification::success(
            "Wallet Connected",
            format!("Connected to {}", account_id),
        ));
        if let Some(warning) = &persist_warning {
            self.notifier
                .notify(Notification::error("Profile Update Failed", warning.clone()));
        }

        Ok(ConnectOutcome {
            state: self.state(),
            persist_warning,
        })
    }

    /// 계정 ID를 프로필에 저장 (best-effort)
    /// Persist the account ID to the profile (best-effort)
    ///
    /// 실패해도 연결 상태를 되돌리지 않으며, 경고 메시지만 반환합니다.
    /// 로그인한 사용자가 없으면 저장을 건너뜁니다.
    async fn persist_linked_account(&self, account_id: &str) -> Option<String> {
        match self.identity.current_user().await {
            Ok(Some(user_id)) => {
                match self.identity.set_linked_account(&user_id, account_id).await {
                    Ok(()) => None,
                    Err(e) => Some(format!("Failed to save wallet to profile: {}", e)),
                }
            }
            Ok(None) => None,
            Err(e) => Some(format!("Failed to load current user: {}", e)),
        }
    }

    /// 실패 분류에 맞는 토스트 한 건 발행
    /// Emit the one category-appropriate toast for a connect failure
    fn notify_connect_failure(&self, err: &WalletError) {
        let notification = match err {
            WalletError::InvalidAccountFormat { .. } => Notification::error(
                "Invalid Account ID",
                "Please enter a valid account ID (e.g., 0.0.1234567)".to_string(),
            ),
            WalletError::AccountNotFound { .. } => Notification::error(
                "Account Not Found",
                "This account does not exist on the network".to_string(),
            ),
            WalletError::NetworkError(_) => Notification::error(
                "Connection Failed",
                "Failed to verify wallet on the network".to_string(),
            ),
            _ => Notification::error("Connection Failed", "Failed to connect wallet".to_string()),
        };
        self.notifier.notify(notification);
    }
}
