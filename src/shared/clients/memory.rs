use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

use super::identity::IdentityStore;
use crate::domains::tip::models::NewTip;

/// In-memory IdentityStore (테스트용 구현)
/// In-memory IdentityStore (implementation for testing)
///
/// 프로필과 팁을 메모리에 보관합니다. fail_* 플래그로 쓰기 실패를 주입해서
/// 프로필 저장 실패 / 기록 실패 경로를 테스트할 수 있습니다.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    current_user: Mutex<Option<String>>,
    linked_accounts: Mutex<HashMap<String, String>>,
    tips: Mutex<Vec<NewTip>>,
    fail_profile_updates: AtomicBool,
    fail_tip_inserts: AtomicBool,
}

impl InMemoryIdentityStore {
    /// 로그인한 사용자가 있는 스토어 생성
    /// Create a store with a signed-in user
    pub fn with_user(user_id: &str) -> Self {
        let store = Self::default();
        *store.current_user.lock() = Some(user_id.to_string());
        store
    }

    /// 프로필에 계정 연결 (시드 데이터)
    /// Link an account to a profile (seed data)
    pub fn link(&self, user_id: &str, account_id: &str) {
        self.linked_accounts
            .lock()
            .insert(user_id.to_string(), account_id.to_string());
    }

    /// 프로필 갱신이 실패하도록 설정
    /// Make profile updates fail
    pub fn set_fail_profile_updates(&self, fail: bool) {
        self.fail_profile_updates.store(fail, Ordering::SeqCst);
    }

    /// 팁 삽입이 실패하도록 설정
    /// Make tip inserts fail
    pub fn set_fail_tip_inserts(&self, fail: bool) {
        self.fail_tip_inserts.store(fail, Ordering::SeqCst);
    }

    /// 저장된 팁 스냅샷
    /// Snapshot of stored tips
    pub fn tips(&self) -> Vec<NewTip> {
        self.tips.lock().clone()
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn current_user(&self) -> Result<Option<String>> {
        Ok(self.current_user.lock().clone())
    }

    async fn get_linked_account(&self, user_id: &str) -> Result<Option<String>> {
        Ok(self.linked_accounts.lock().get(user_id).cloned())
    }

    async fn set_linked_account(&self, user_id: &str, account_id: &str) -> Result<()> {
        if self.fail_profile_updates.load(Ordering::SeqCst) {
            bail!("InMemoryIdentityStore: profile update failed");
        }

        self.linked_accounts
            .lock()
            .insert(user_id.to_string(), account_id.to_string());
        Ok(())
    }

    async fn find_user_by_account(&self, account_id: &str) -> Result<Option<String>> {
        Ok(self
            .linked_accounts
            .lock()
            .iter()
            .find(|(_, linked)| linked.as_str() == account_id)
            .map(|(user_id, _)| user_id.clone()))
    }

    async fn insert_tip(&self, tip: &NewTip) -> Result<()> {
        if self.fail_tip_inserts.load(Ordering::SeqCst) {
            bail!("InMemoryIdentityStore: tip insert failed");
        }

        self.tips.lock().push(tip.clone());
        Ok(())
    }
}
