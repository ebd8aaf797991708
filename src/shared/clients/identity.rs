use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::domains::tip::models::NewTip;

/// 신원/영속성 서비스 인터페이스 (backend-as-a-service)
/// Identity/persistence service interface (backend-as-a-service)
///
/// 이 서비스가 "어떤 계정이 어떤 신원에 연결되어 있는가"의 진실의 원본입니다.
/// 코어는 프로필을 생성/삭제하지 않고, 계정 ID 필드 하나만 읽고 갱신합니다.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// 현재 로그인한 사용자 ID 조회
    /// Get the signed-in user ID, if any
    async fn current_user(&self) -> Result<Option<String>>;

    /// 프로필에 연결된 계정 ID 조회
    /// Get the account ID linked to a profile
    async fn get_linked_account(&self, user_id: &str) -> Result<Option<String>>;

    /// 프로필의 연결 계정 ID 갱신
    /// Update the linked account ID of a profile
    async fn set_linked_account(&self, user_id: &str, account_id: &str) -> Result<()>;

    /// 계정 ID로 프로필 검색
    /// Find the profile whose linked account ID matches
    async fn find_user_by_account(&self, account_id: &str) -> Result<Option<String>>;

    /// 팁 기록 삽입 (성공한 전송당 정확히 한 번)
    /// Insert a tip record (exactly once per successful transfer)
    async fn insert_tip(&self, tip: &NewTip) -> Result<()>;
}

// Supabase REST 클라이언트
// 역할: NestJS의 HttpClient나 axios 같은 것
// Supabase REST client for profiles and tips
pub struct SupabaseIdentityClient {
    http_client: reqwest::Client,
    base_url: String,
    anon_key: String,
    user_token: String,
}

/// /auth/v1/user 응답
#[derive(Debug, Deserialize)]
struct AuthUserResponse {
    id: String,
}

/// profiles 행 (필요한 컬럼만)
/// A profiles row (only the columns we read)
#[derive(Debug, Deserialize)]
struct ProfileRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    hedera_account_id: Option<String>,
}

impl SupabaseIdentityClient {
    /// 클라이언트 생성
    /// Create client instance
    pub fn new(
        base_url: &str,
        anon_key: &str,
        user_token: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            user_token: user_token.to_string(),
        })
    }

    /// 공통 헤더를 붙인 요청 빌더
    /// Request builder with the common Supabase headers
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.user_token))
            .header("User-Agent", "tip-server/1.0")
    }
}

#[async_trait]
impl IdentityStore for SupabaseIdentityClient {
    async fn current_user(&self) -> Result<Option<String>> {
        let url = format!("{}/auth/v1/user", self.base_url);

        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .context("Failed to fetch current user")?;

        // 로그인하지 않은 세션은 401을 반환함 (에러가 아니라 None)
        // An unauthenticated session returns 401 (None, not an error)
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Auth API returned error: {} - {}", status, body);
        }

        let user: AuthUserResponse = response
            .json()
            .await
            .context("Failed to parse auth user response")?;

        Ok(Some(user.id))
    }

    async fn get_linked_account(&self, user_id: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/rest/v1/profiles?id=eq.{}&select=hedera_account_id",
            self.base_url, user_id
        );

        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .context("Failed to fetch profile")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Profiles API returned error: {} - {}", status, body);
        }

        let rows: Vec<ProfileRow> = response
            .json()
            .await
            .context("Failed to parse profile response")?;

        Ok(rows.into_iter().next().and_then(|row| row.hedera_account_id))
    }

    async fn set_linked_account(&self, user_id: &str, account_id: &str) -> Result<()> {
        let url = format!("{}/rest/v1/profiles?id=eq.{}", self.base_url, user_id);

        let response = self
            .request(reqwest::Method::PATCH, &url)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({ "hedera_account_id": account_id }))
            .send()
            .await
            .context("Failed to update profile")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Profiles API returned error: {} - {}", status, body);
        }

        Ok(())
    }

    async fn find_user_by_account(&self, account_id: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/rest/v1/profiles?hedera_account_id=eq.{}&select=id",
            self.base_url, account_id
        );

        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .context("Failed to search profiles")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Profiles API returned error: {} - {}", status, body);
        }

        let rows: Vec<ProfileRow> = response
            .json()
            .await
            .context("Failed to parse profile search response")?;

        Ok(rows.into_iter().next().and_then(|row| row.id))
    }

    async fn insert_tip(&self, tip: &NewTip) -> Result<()> {
        let url = format!("{}/rest/v1/tips", self.base_url);

        let response = self
            .request(reqwest::Method::POST, &url)
            .header("Content-Type", "application/json")
            .json(&vec![tip])
            .send()
            .await
            .context("Failed to insert tip")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Tips API returned error: {} - {}", status, body);
        }

        Ok(())
    }
}
