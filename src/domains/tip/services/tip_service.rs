use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::domains::tip::models::{NewTip, TipStatus};
use crate::domains::tip::services::TransferService;
use crate::domains::wallet::models::AccountId;
use crate::domains::wallet::services::{AccountVerifier, WalletService};
use crate::shared::clients::IdentityStore;
use crate::shared::errors::TipError;
use crate::shared::services::{Notification, Notifier};

/// 오프체인 기록 결과
/// Off-chain recording outcome
///
/// 전송 자체는 이미 성공했으므로 어느 변형이든 치명적이지 않지만,
/// Recorded가 아닌 경우는 호출자에게 반드시 드러나야 합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// 기록 완료
    Recorded,

    /// 수신 계정과 일치하는 프로필 없음 (기록 생략)
    /// No profile matches the recipient account (recording skipped)
    RecipientUnresolved,

    /// 저장 서비스 에러로 기록 실패
    /// Recording failed due to a service error
    Failed(String),
}

/// 팁 전송 결과
/// Send tip outcome
///
/// 전송이 수락되었으면 기록 결과와 무관하게 트랜잭션 ID를 포함합니다.
#[derive(Debug, Clone)]
pub struct SendTipOutcome {
    pub transaction_id: String,
    pub record: RecordOutcome,
}

// 팁 서비스
// 역할: NestJS의 Service 같은 것
// TipService: records tips off-chain and orchestrates send_tip
//
// 계약: 원장 전송이 진실의 원본이고 오프체인 미러는 뒤처지거나 빠질 수
// 있습니다. 기록 실패는 성공 메시지에 합쳐지지 않고 별도 경고로 전달됩니다.
#[derive(Clone)]
pub struct TipService {
    wallet_service: WalletService,
    transfer_service: TransferService,
    identity: Arc<dyn IdentityStore>,
    notifier: Arc<dyn Notifier>,
    op_lock: Arc<Mutex<()>>,
}

impl TipService {
    /// 생성자 (op_lock은 WalletService와 공유 — 지갑당 단일 비행)
    /// Constructor (op_lock shared with WalletService — single flight per wallet)
    pub fn new(
        wallet_service: WalletService,
        transfer_service: TransferService,
        identity: Arc<dyn IdentityStore>,
        notifier: Arc<dyn Notifier>,
        op_lock: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            wallet_service,
            transfer_service,
            identity,
            notifier,
            op_lock,
        }
    }

    /// 오프체인 팁 기록
    /// Record the off-chain tip row
    ///
    /// 수신자 프로필을 계정 ID로 해석하고, 해석되면 completed 상태의 팁을
    /// 정확히 한 건 삽입합니다. RecipientUnresolved(프로필 없음)와
    /// RecordingFailed(저장 에러)는 구분됩니다.
    pub async fn record_tip(
        &self,
        recipient: &AccountId,
        amount: Decimal,
        transaction_id: &str,
        message: Option<&str>,
    ) -> Result<(), TipError> {
        // 1. 수신자 프로필 해석
        // Resolve the recipient profile
        let to_user_id = match self
            .identity
            .find_user_by_account(&recipient.to_string())
            .await
        {
            Ok(Some(user_id)) => user_id,
            Ok(None) => {
                return Err(TipError::RecipientUnresolved {
                    account_id: recipient.to_string(),
                })
            }
            Err(e) => return Err(TipError::RecordingFailed(e.to_string())),
        };

        // 2. 팁 행 삽입 (전송당 정확히 한 번)
        // Insert the tip row (exactly once per transfer)
        let tip = NewTip {
            to_user_id,
            amount,
            transaction_id: transaction_id.to_string(),
            status: TipStatus::Completed,
            message: message.map(|m| m.to_string()),
        };

        self.identity
            .insert_tip(&tip)
            .await
            .map_err(|e| TipError::RecordingFailed(e.to_string()))
    }

    /// 팁 전송 오케스트레이션
    /// Send tip orchestration
    ///
    /// 연결 상태 확인 → 제출 → 성공 시 오프체인 기록. 전제 조건 실패는
    /// 어떤 네트워크/서명 호출보다 먼저 검출됩니다. 제출이 실패하면 기록은
    /// 시도하지 않습니다. 제출이 성공했는데 기록이 실패하면 트랜잭션 ID는
    /// 그대로 반환하고 기록 실패를 비치명적 경고로 알립니다.
    pub async fn send_tip(
        &self,
        to_account_id: &str,
        amount: Decimal,
        message: Option<&str>,
    ) -> Result<SendTipOutcome, TipError> {
        // 1. 전제 조건: 지갑 연결 확인
        // Precondition: wallet must be connected
        let from = match self.wallet_service.connected_account() {
            Some(account_id) => account_id,
            None => {
                self.notifier.notify(Notification::error(
                    "Wallet Not Connected",
                    "Please connect your wallet first".to_string(),
                ));
                return Err(TipError::NotConnected);
            }
        };

        // 2. 전제 조건: 양수 금액 (전송 지시 생성 전에 거절)
        // Precondition: positive amount (rejected before any instruction is built)
        if amount <= Decimal::ZERO {
            self.notifier.notify(Notification::error(
                "Invalid Amount",
                "Tip amount must be greater than zero".to_string(),
            ));
            return Err(TipError::InvalidAmount { amount });
        }

        // 3. 전제 조건: 수신 계정 ID 문법 (연결 경로와 같은 규칙)
        // Precondition: recipient account ID syntax (same rule as the connect paths)
        let to = match AccountVerifier::parse(to_account_id) {
            Ok(to) => to,
            Err(_) => {
                self.notifier.notify(Notification::error(
                    "Invalid Account ID",
                    "Please enter a valid account ID (e.g., 0.0.1234567)".to_string(),
                ));
                return Err(TipError::InvalidRecipient {
                    input: to_account_id.to_string(),
                });
            }
        };

        // 연결된 계정은 표준 형식으로 저장되어 있어야 함
        let from = from
            .parse::<AccountId>()
            .map_err(|_| TipError::TransactionFailed("connected account ID is malformed".to_string()))?;

        // 4. 단일 비행: 같은 지갑의 동시 제출은 거절
        // Single flight: concurrent submissions for this wallet are rejected
        let _guard = self
            .op_lock
            .clone()
            .try_lock_owned()
            .map_err(|_| TipError::Busy)?;

        // 5. 서명 및 제출 (실패 시 기록 시도 없음)
        // Sign and submit (no recording attempted on failure)
        let result = match self
            .transfer_service
            .submit(&from, &to, amount, message)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                self.notifier.notify(Notification::error(
                    "Transaction Failed",
                    "Failed to send tip".to_string(),
                ));
                return Err(err);
            }
        };

        // 6. 성공 알림 (기록 결과와 무관하게 항상 발행)
        // Success toast (always, regardless of the recording outcome)
        self.notifier.notify(Notification::success(
            "Tip Sent!",
            format!("Successfully sent {} HBAR", amount),
        ));

        // 7. 오프체인 기록 (best-effort, 실패는 별도 경고)
        // Off-chain record (best-effort; failure is a separate warning)
        let record = match self
            .record_tip(&to, amount, &result.transaction_id, message)
            .await
        {
            Ok(()) => RecordOutcome::Recorded,
            Err(TipError::RecipientUnresolved { .. }) => {
                self.notifier.notify(Notification::error(
                    "Tip Not Recorded",
                    "Recipient has no profile; the transfer is on-chain but unrecorded"
                        .to_string(),
                ));
                RecordOutcome::RecipientUnresolved
            }
            Err(TipError::RecordingFailed(reason)) => {
                self.notifier.notify(Notification::error(
                    "Tip Not Recorded",
                    format!("Failed to record tip: {}", reason),
                ));
                RecordOutcome::Failed(reason)
            }
            Err(err) => {
                let reason = err.to_string();
                self.notifier.notify(Notification::error(
                    "Tip Not Recorded",
                    format!("Failed to record tip: {}", reason),
                ));
                RecordOutcome::Failed(reason)
            }
        };

        Ok(SendTipOutcome {
            transaction_id: result.transaction_id,
            record,
        })
    }
}
