use std::time::Duration;

use rust_decimal::Decimal;
use tokio::time::timeout;

use crate::domains::wallet::models::{AccountId, TransactionResult, TransferInstruction};
use crate::domains::wallet::provider::WalletProviderHandle;
use crate::shared::errors::TipError;

// 전송 서비스
// 역할: NestJS의 Service 같은 것
// TransferService: builds a balanced transfer and drives the extension
//
// 원장 수준의 원자성은 서명 경로가 보장하므로 로컬 롤백은 없습니다.
// 제출 직렬화는 호출자 (TipService)의 op_lock이 담당합니다.
#[derive(Clone)]
pub struct TransferService {
    provider: WalletProviderHandle,
    extension_timeout: Duration,
}

impl TransferService {
    /// 생성자
    /// Constructor
    pub fn new(provider: WalletProviderHandle, extension_timeout: Duration) -> Self {
        Self {
            provider,
            extension_timeout,
        }
    }

    /// 전송 제출: from에서 to로 amount만큼 (균형 잡힌 양쪽 leg)
    /// Submit a transfer: debit `from`, credit `to` by exactly `amount`
    ///
    /// 실패 시 어떤 후속 동작도 하지 않습니다 (오프체인 쓰기 없음).
    pub async fn submit(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Decimal,
        memo: Option<&str>,
    ) -> Result<TransactionResult, TipError> {
        // 1. 전제 조건: 금액은 양수
        // Precondition: amount must be positive
        if amount <= Decimal::ZERO {
            return Err(TipError::InvalidAmount { amount });
        }

        let provider = self
            .provider
            .get()
            .ok_or_else(|| TipError::TransactionFailed("wallet extension not available".to_string()))?;

        // 2. 전송 지시 생성 (equal-and-opposite legs + 메모)
        // Build the transfer instruction (equal-and-opposite legs + memo)
        let instruction = TransferInstruction::tip(from.clone(), to.clone(), amount, memo);

        // 3. 서명 및 제출 (타임아웃 포함)
        // Sign and submit (bounded timeout)
        let response = match timeout(
            self.extension_timeout,
            provider.sign_and_submit(&instruction),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(TipError::TransactionFailed(e.to_string())),
            Err(_) => {
                return Err(TipError::TransactionFailed(
                    "extension call timed out".to_string(),
                ))
            }
        };

        // 4. 결과 확인: 성공이면 네트워크가 부여한 트랜잭션 ID 포함
        // Check the result: success carries the network-assigned transaction ID
        match (response.success, response.transaction_id) {
            (true, Some(transaction_id)) => Ok(TransactionResult { transaction_id }),
            _ => Err(TipError::TransactionFailed(
                "submission rejected by wallet".to_string(),
            )),
        }
    }
}
