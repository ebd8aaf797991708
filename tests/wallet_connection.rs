// =====================================================
// 지갑 연결 통합 테스트
// =====================================================

mod common;
use common::*;

use std::time::Duration;

use tip_server::domains::wallet::provider::MockProvider;
use tip_server::shared::IdentityStore;
use tip_server::shared::errors::WalletError;

/// 테스트: 수동 연결 성공 → Connected 전이 + 프로필 저장
///
/// 존재하는 계정을 수동 입력하면 상태가 Connected로 바뀌고,
/// 계정 ID가 프로필에 저장되는지 확인합니다.
#[tokio::test]
async fn test_manual_connect_succeeds_and_persists() {
    let harness = setup(None, LedgerMode::Found);

    let outcome = harness
        .app_state
        .wallet_state
        .wallet_service
        .connect_manually(TEST_ACCOUNT_ID)
        .await
        .expect("manual connect should succeed");

    assert!(outcome.state.is_connected);
    assert_eq!(outcome.state.account_id.as_deref(), Some(TEST_ACCOUNT_ID));
    assert!(!outcome.state.is_connecting);
    assert!(outcome.persist_warning.is_none());

    // 존재 확인은 정확히 한 번
    assert_eq!(harness.ledger.calls(), 1);

    // 프로필에 저장됨
    let linked = harness
        .identity
        .get_linked_account(TEST_USER_ID)
        .await
        .unwrap();
    assert_eq!(linked.as_deref(), Some(TEST_ACCOUNT_ID));

    // 성공 토스트 한 건
    assert_eq!(harness.notifier.titles(), vec!["Wallet Connected"]);
}

/// 테스트: 형식이 잘못된 입력 → 네트워크 호출 없이 거절
///
/// 문법 검사를 통과하지 못하면 원장 조회가 한 번도 일어나지 않아야 합니다.
#[tokio::test]
async fn test_manual_connect_rejects_malformed_without_network_call() {
    let harness = setup(None, LedgerMode::Found);

    for candidate in ["", "abc", "0.0", "0.0.abc", "0.1.234"] {
        let result = harness
            .app_state
            .wallet_state
            .wallet_service
            .connect_manually(candidate)
            .await;

        assert!(
            matches!(result, Err(WalletError::InvalidAccountFormat { .. })),
            "{:?} should fail with InvalidAccountFormat",
            candidate
        );
    }

    // 네트워크 호출 없음
    assert_eq!(harness.ledger.calls(), 0);

    let state = harness.app_state.wallet_state.wallet_service.state();
    assert!(!state.is_connected);
    assert!(!state.is_connecting);
}

/// 테스트: 존재하지 않는 계정 → AccountNotFound + Disconnected 유지
#[tokio::test]
async fn test_manual_connect_unknown_account_fails() {
    let harness = setup(None, LedgerMode::NotFound);

    let result = harness
        .app_state
        .wallet_state
        .wallet_service
        .connect_manually("0.0.99999999")
        .await;

    assert!(matches!(result, Err(WalletError::AccountNotFound { .. })));
    assert_eq!(harness.ledger.calls(), 1);

    let state = harness.app_state.wallet_state.wallet_service.state();
    assert!(!state.is_connected);

    // 저장은 일어나지 않음
    let linked = harness
        .identity
        .get_linked_account(TEST_USER_ID)
        .await
        .unwrap();
    assert!(linked.is_none());

    assert_eq!(harness.notifier.titles(), vec!["Account Not Found"]);
}

/// 테스트: 존재 확인 실패 (전송 에러) → NetworkError로 구분
#[tokio::test]
async fn test_manual_connect_network_error_is_distinguished() {
    let harness = setup(None, LedgerMode::Error);

    let result = harness
        .app_state
        .wallet_state
        .wallet_service
        .connect_manually(TEST_ACCOUNT_ID)
        .await;

    assert!(matches!(result, Err(WalletError::NetworkError(_))));

    let state = harness.app_state.wallet_state.wallet_service.state();
    assert!(!state.is_connected);

    assert_eq!(harness.notifier.titles(), vec!["Connection Failed"]);
}

/// 테스트: 익스텐션 부재 → 어떤 서비스에도 접근하지 않고 실패
#[tokio::test]
async fn test_extension_connect_without_extension() {
    let harness = setup(None, LedgerMode::Found);

    let result = harness
        .app_state
        .wallet_state
        .wallet_service
        .connect_via_extension()
        .await;

    assert!(matches!(result, Err(WalletError::WalletUnavailable)));
    assert_eq!(harness.ledger.calls(), 0);

    let state = harness.app_state.wallet_state.wallet_service.state();
    assert!(!state.is_connected);
    assert!(!state.is_connecting);

    assert_eq!(harness.notifier.titles(), vec!["Wallet Not Found"]);
}

/// 테스트: 익스텐션 연결 성공 → 첫 번째 계정으로 Connected + 프로필 저장
#[tokio::test]
async fn test_extension_connect_succeeds() {
    let harness = setup(
        Some(MockProvider::connected(TEST_ACCOUNT_ID)),
        LedgerMode::Found,
    );

    let outcome = harness
        .app_state
        .wallet_state
        .wallet_service
        .connect_via_extension()
        .await
        .expect("extension connect should succeed");

    assert!(outcome.state.is_connected);
    assert_eq!(outcome.state.account_id.as_deref(), Some(TEST_ACCOUNT_ID));

    // 익스텐션 경로는 재검증하지 않음
    assert_eq!(harness.ledger.calls(), 0);

    let linked = harness
        .identity
        .get_linked_account(TEST_USER_ID)
        .await
        .unwrap();
    assert_eq!(linked.as_deref(), Some(TEST_ACCOUNT_ID));
}

/// 테스트: 익스텐션 연결 거부 → ConnectionFailed + Disconnected
#[tokio::test]
async fn test_extension_connect_rejected() {
    let harness = setup(Some(MockProvider::rejecting()), LedgerMode::Found);

    let result = harness
        .app_state
        .wallet_state
        .wallet_service
        .connect_via_extension()
        .await;

    assert!(matches!(result, Err(WalletError::ConnectionFailed(_))));

    let state = harness.app_state.wallet_state.wallet_service.state();
    assert!(!state.is_connected);
    assert!(!state.is_connecting);

    assert_eq!(harness.notifier.titles(), vec!["Connection Failed"]);
}

/// 테스트: 프로필 저장 실패 → 연결은 유지되고 경고가 따로 발행됨
///
/// best-effort 저장: 실패해도 메모리상의 Connected 상태는 되돌리지 않습니다.
#[tokio::test]
async fn test_persist_failure_keeps_connected_state() {
    let harness = setup(
        Some(MockProvider::connected(TEST_ACCOUNT_ID)),
        LedgerMode::Found,
    );
    harness.identity.set_fail_profile_updates(true);

    let outcome = harness
        .app_state
        .wallet_state
        .wallet_service
        .connect_via_extension()
        .await
        .expect("connect should still succeed");

    assert!(outcome.state.is_connected);
    assert!(outcome.persist_warning.is_some());

    // 성공 토스트 + 별도의 경고 토스트
    assert_eq!(
        harness.notifier.titles(),
        vec!["Wallet Connected", "Profile Update Failed"]
    );
}

/// 테스트: 프로필 동기화는 멱등
///
/// 두 번 연속 호출해도 같은 상태이고, 프로필에 연결 계정이 있으면
/// 재검증 없이 Connected가 됩니다.
#[tokio::test]
async fn test_sync_with_profile_is_idempotent() {
    let harness = setup(None, LedgerMode::Found);
    harness.identity.link(TEST_USER_ID, TEST_ACCOUNT_ID);

    let service = &harness.app_state.wallet_state.wallet_service;

    let first = service.sync_with_profile().await.unwrap();
    let second = service.sync_with_profile().await.unwrap();

    assert!(first.is_connected);
    assert_eq!(first.account_id, second.account_id);
    assert_eq!(first.is_connected, second.is_connected);
    assert_eq!(first.is_connecting, second.is_connecting);

    // 재검증 없음
    assert_eq!(harness.ledger.calls(), 0);
}

/// 테스트: 동기화는 Connected 상태를 절대 되돌리지 않음
///
/// 이미 연결된 뒤 프로필이 바뀌어도 (또는 비어 있어도) 연결이 유지됩니다.
#[tokio::test]
async fn test_sync_never_regresses_connected_state() {
    let harness = setup(None, LedgerMode::Found);
    let service = &harness.app_state.wallet_state.wallet_service;

    service
        .connect_manually(TEST_ACCOUNT_ID)
        .await
        .expect("manual connect should succeed");

    // 프로필의 연결 계정을 다른 값으로 바꿔도
    harness.identity.link(TEST_USER_ID, RECIPIENT_ACCOUNT_ID);

    let state = service.sync_with_profile().await.unwrap();
    assert!(state.is_connected);
    assert_eq!(state.account_id.as_deref(), Some(TEST_ACCOUNT_ID));
}

/// 테스트: 프로필에 연결 계정이 없으면 동기화 후에도 Disconnected
#[tokio::test]
async fn test_sync_without_linked_account_stays_disconnected() {
    let harness = setup(None, LedgerMode::Found);

    let state = harness
        .app_state
        .wallet_state
        .wallet_service
        .sync_with_profile()
        .await
        .unwrap();

    assert!(!state.is_connected);
    assert!(state.account_id.is_none());
}

/// 테스트: 익스텐션 연결이 타임아웃을 넘기면 ConnectionFailed로 실패
///
/// 익스텐션이 응답하지 않아도 연결 시도는 설정된 시간 안에 끝나야 하고,
/// 상태는 Disconnected로 돌아가야 합니다.
#[tokio::test]
async fn test_extension_connect_times_out() {
    let harness = setup_with_timeout(
        Some(
            MockProvider::connected(TEST_ACCOUNT_ID)
                .with_connect_delay(Duration::from_millis(1500)),
        ),
        LedgerMode::Found,
        1,
    );

    let result = harness
        .app_state
        .wallet_state
        .wallet_service
        .connect_via_extension()
        .await;

    assert!(matches!(result, Err(WalletError::ConnectionFailed(_))));

    let state = harness.app_state.wallet_state.wallet_service.state();
    assert!(!state.is_connected);
    assert!(!state.is_connecting);

    assert_eq!(harness.notifier.titles(), vec!["Connection Failed"]);
}

/// 테스트: 연결 작업 중의 두 번째 연결 시도는 Busy로 거절됨
#[tokio::test]
async fn test_concurrent_connects_are_rejected_as_busy() {
    let harness = setup(
        Some(
            MockProvider::connected(TEST_ACCOUNT_ID)
                .with_connect_delay(Duration::from_millis(200)),
        ),
        LedgerMode::Found,
    );

    let service = harness.app_state.wallet_state.wallet_service.clone();
    let racing = harness.app_state.wallet_state.wallet_service.clone();

    let first = tokio::spawn(async move { service.connect_via_extension().await });

    // 첫 번째 연결이 익스텐션 호출에 머무는 동안 두 번째 시도
    tokio::time::sleep(Duration::from_millis(50)).await;
    let second = racing.connect_via_extension().await;
    assert!(matches!(second, Err(WalletError::Busy)));

    let first = first.await.expect("task should not panic");
    assert!(first.is_ok(), "first connect should still succeed");

    // 익스텐션 호출은 한 번만 일어남
    let provider = harness.provider.as_ref().unwrap();
    assert_eq!(provider.connect_calls(), 1);
}
