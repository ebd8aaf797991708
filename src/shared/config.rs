use std::time::Duration;

/// 서버 설정
/// Application Configuration
///
/// 외부 서비스 주소와 타임아웃 값들
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 서버 바인드 주소
    /// Server bind address
    pub bind_addr: String,

    /// CORS 허용 오리진 (프론트엔드 주소)
    /// CORS allowed origin (frontend address)
    pub cors_origin: String,

    /// Hedera 미러 노드 URL (계정 존재 확인용, 읽기 전용)
    /// Hedera mirror node URL (read-only, account existence check)
    pub mirror_node_url: String,

    /// Supabase 프로젝트 URL (프로필/팁 저장소)
    /// Supabase project URL (profiles / tips storage)
    pub supabase_url: String,

    /// Supabase anon key
    pub supabase_anon_key: String,

    /// 로그인한 사용자의 액세스 토큰
    /// Access token of the signed-in user
    pub supabase_user_token: String,

    /// 외부 HTTP 호출 타임아웃 (초)
    /// Outbound HTTP call timeout (seconds)
    pub http_timeout_secs: u64,

    /// 지갑 익스텐션 호출 타임아웃 (초)
    /// Wallet extension call timeout (seconds)
    pub extension_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3002".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
            mirror_node_url: "https://mainnet.mirrornode.hedera.com".to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: String::new(),
            supabase_user_token: String::new(),
            http_timeout_secs: 10,
            extension_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// 환경변수에서 설정 로드
    /// Load configuration from environment variables
    ///
    /// 환경변수가 없으면 기본값 사용
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let http_timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.http_timeout_secs);

        let extension_timeout_secs = std::env::var("EXTENSION_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.extension_timeout_secs);

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            mirror_node_url: std::env::var("MIRROR_NODE_URL").unwrap_or(defaults.mirror_node_url),
            supabase_url: std::env::var("SUPABASE_URL").unwrap_or(defaults.supabase_url),
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY")
                .unwrap_or(defaults.supabase_anon_key),
            supabase_user_token: std::env::var("SUPABASE_USER_TOKEN")
                .unwrap_or(defaults.supabase_user_token),
            http_timeout_secs,
            extension_timeout_secs,
        }
    }

    /// 외부 HTTP 호출 타임아웃
    /// Outbound HTTP call timeout
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// 지갑 익스텐션 호출 타임아웃
    /// Wallet extension call timeout
    pub fn extension_timeout(&self) -> Duration {
        Duration::from_secs(self.extension_timeout_secs)
    }
}
