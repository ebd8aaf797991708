use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::domains::wallet::models::AccountId;

/// 계정 조회 결과 (HTTP 경계의 명시적 태그 타입)
/// Account lookup result (explicit tagged type at the HTTP boundary)
///
/// 전송 실패(타임아웃 포함)는 Err로 구분됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountLookup {
    Found,
    NotFound,
}

/// 읽기 전용 원장 조회 인터페이스
/// Read-only ledger query interface
///
/// "이 계정이 네트워크에 존재하는가"만 답합니다. 합의에는 참여하지 않습니다.
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    /// 계정 존재 확인
    /// Check whether the account exists
    async fn lookup_account(&self, account_id: &AccountId) -> Result<AccountLookup>;
}

// Hedera 미러 노드 클라이언트
// 역할: NestJS의 HttpClient나 axios 같은 것
// Mirror node client for account existence checks
pub struct MirrorNodeClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MirrorNodeClient {
    /// 클라이언트 생성 (타임아웃 만료는 전송 에러로 분류됨)
    /// Create client instance (timeout expiry surfaces as a transport error)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LedgerQuery for MirrorNodeClient {
    async fn lookup_account(&self, account_id: &AccountId) -> Result<AccountLookup> {
        // Build request URL
        let url = format!("{}/api/v1/accounts/{}", self.base_url, account_id);

        // HTTP GET 요청
        // HTTP GET request
        let response = self
            .http_client
            .get(&url)
            .header("User-Agent", "tip-server/1.0")
            .send()
            .await
            .context("Failed to send request to mirror node")?;

        // HTTP 상태 코드 확인: 2xx면 존재, 그 외는 모두 NotFound로 분류
        // Check HTTP status: 2xx means the account exists, anything else is NotFound
        if response.status().is_success() {
            Ok(AccountLookup::Found)
        } else {
            Ok(AccountLookup::NotFound)
        }
    }
}
