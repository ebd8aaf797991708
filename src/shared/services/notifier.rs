/// 알림 심각도
/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// 사용자 알림 (토스트 한 건)
/// User notification (one toast)
///
/// 계약은 "제목+설명+심각도 전달"뿐입니다 (fire-and-forget).
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Success,
        }
    }

    pub fn error(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Error,
        }
    }
}

/// 알림 전달 인터페이스
/// Notification delivery interface
///
/// 비즈니스 로직은 이 포트로만 사용자에게 메시지를 보냅니다.
/// UI 없이도 테스트할 수 있도록 분리되어 있습니다.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// stdout 알림 구현 (서버 로그로 출력)
/// stdout notifier (server log output)
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, notification: Notification) {
        let severity = match notification.severity {
            Severity::Success => "success",
            Severity::Error => "error",
        };
        println!(
            "[toast:{}] {}: {}",
            severity, notification.title, notification.description
        );
    }
}
