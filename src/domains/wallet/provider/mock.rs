use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;

use super::{AppMetadata, ConnectResponse, SubmitResponse, WalletProvider};
use crate::domains::wallet::models::TransferInstruction;

/// Mock Provider (테스트용 구현)
/// Mock Provider (implementation for testing)
///
/// 빌더 메서드로 연결/제출 응답을 스크립트하고, 호출 횟수를 기록합니다.
/// submit_delay를 주면 제출이 그 시간 동안 멈춰서 직렬화 테스트에 쓸 수 있습니다.
pub struct MockProvider {
    connect_success: bool,
    account_ids: Vec<String>,
    connect_error: Option<String>,

    connect_delay: Option<Duration>,

    submit_success: bool,
    transaction_id: Option<String>,
    submit_error: Option<String>,
    submit_delay: Option<Duration>,

    connect_calls: AtomicUsize,
    submit_calls: AtomicUsize,
}

impl MockProvider {
    /// 연결이 성공하는 프로바이더 (계정 1개 허용)
    /// Provider whose connect succeeds with one granted account
    pub fn connected(account_id: &str) -> Self {
        Self {
            connect_success: true,
            account_ids: vec![account_id.to_string()],
            connect_error: None,
            connect_delay: None,
            submit_success: true,
            transaction_id: Some("0.0.1001@1700000000.000000001".to_string()),
            submit_error: None,
            submit_delay: None,
            connect_calls: AtomicUsize::new(0),
            submit_calls: AtomicUsize::new(0),
        }
    }

    /// 연결이 거부되는 프로바이더
    /// Provider whose connect is rejected
    pub fn rejecting() -> Self {
        let mut provider = Self::connected("0.0.0");
        provider.connect_success = false;
        provider.account_ids.clear();
        provider
    }

    /// 연결이 에러로 실패하는 프로바이더
    /// Provider whose connect errors out
    pub fn erroring(message: &str) -> Self {
        let mut provider = Self::connected("0.0.0");
        provider.connect_error = Some(message.to_string());
        provider
    }

    /// 제출 성공 시 반환할 트랜잭션 ID 설정
    /// Set the transaction ID returned on successful submit
    pub fn with_transaction_id(mut self, transaction_id: &str) -> Self {
        self.transaction_id = Some(transaction_id.to_string());
        self
    }

    /// 제출이 거부되도록 설정
    /// Make submissions rejected
    pub fn with_submit_rejection(mut self) -> Self {
        self.submit_success = false;
        self.transaction_id = None;
        self
    }

    /// 제출이 에러로 실패하도록 설정
    /// Make submissions error out
    pub fn with_submit_error(mut self, message: &str) -> Self {
        self.submit_error = Some(message.to_string());
        self
    }

    /// 연결 지연 설정 (직렬화 테스트용)
    /// Delay each connect (for serialization tests)
    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = Some(delay);
        self
    }

    /// 제출 지연 설정 (직렬화 테스트용)
    /// Delay each submission (for serialization tests)
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = Some(delay);
        self
    }

    /// connect 호출 횟수
    /// Number of connect calls
    pub fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    /// sign_and_submit 호출 횟수
    /// Number of sign_and_submit calls
    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn connect(&self, _metadata: &AppMetadata) -> Result<ConnectResponse> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.connect_delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.connect_error {
            bail!("MockProvider: {}", message);
        }

        Ok(ConnectResponse {
            success: self.connect_success,
            account_ids: self.account_ids.clone(),
        })
    }

    async fn sign_and_submit(&self, instruction: &TransferInstruction) -> Result<SubmitResponse> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);

        // 불균형 전송은 익스텐션/원장이 거부함
        if !instruction.is_balanced() {
            bail!("MockProvider: unbalanced transfer instruction");
        }

        if let Some(delay) = self.submit_delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.submit_error {
            bail!("MockProvider: {}", message);
        }

        Ok(SubmitResponse {
            success: self.submit_success,
            transaction_id: self.transaction_id.clone(),
        })
    }
}
