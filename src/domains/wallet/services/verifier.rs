use std::sync::Arc;

use crate::domains::wallet::models::AccountId;
use crate::shared::clients::{AccountLookup, LedgerQuery};
use crate::shared::errors::WalletError;

// 계정 검증 서비스
// 역할: NestJS의 Service 같은 것
// AccountVerifier: validates account ID syntax and confirms existence
//
// 부수효과 없음, 멱등. 문법 검사가 네트워크 호출보다 먼저 수행됩니다.
#[derive(Clone)]
pub struct AccountVerifier {
    ledger: Arc<dyn LedgerQuery>,
}

impl AccountVerifier {
    /// 생성자
    /// Constructor
    pub fn new(ledger: Arc<dyn LedgerQuery>) -> Self {
        Self { ledger }
    }

    /// 문법 검사만 수행 (네트워크 호출 없음)
    /// Syntax check only (no network call)
    ///
    /// 미러 노드가 서비스하는 네트워크의 계정은 shard 0 / realm 0이므로
    /// (예: 0.0.1234567) 그 밖의 주소는 형식 오류로 거절합니다.
    pub fn parse(candidate: &str) -> Result<AccountId, WalletError> {
        let account_id = candidate
            .parse::<AccountId>()
            .map_err(|e| WalletError::InvalidAccountFormat { input: e.input })?;

        if account_id.shard != 0 || account_id.realm != 0 {
            return Err(WalletError::InvalidAccountFormat {
                input: candidate.to_string(),
            });
        }

        Ok(account_id)
    }

    /// 계정 검증: 문법 검사 후 미러 노드에서 존재 확인
    /// Verify account: syntax check, then one existence lookup
    ///
    /// NotFound(응답은 왔지만 계정 없음)와 NetworkError(조회가 완료되지
    /// 못함)는 구분됩니다. 후자는 일시적일 수 있어 재시도 판단에 쓰입니다.
    pub async fn verify(&self, candidate: &str) -> Result<AccountId, WalletError> {
        // 1. 문법 검사 (실패 시 네트워크 호출 없이 즉시 반환)
        // Syntax check (fail fast, zero network cost for malformed input)
        let account_id = Self::parse(candidate)?;

        // 2. 존재 확인 (단일 읽기)
        // Existence check (single read)
        match self.ledger.lookup_account(&account_id).await {
            Ok(AccountLookup::Found) => Ok(account_id),
            Ok(AccountLookup::NotFound) => Err(WalletError::AccountNotFound {
                account_id: account_id.to_string(),
            }),
            Err(e) => Err(WalletError::NetworkError(e.to_string())),
        }
    }
}
