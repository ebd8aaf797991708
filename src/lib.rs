// TipHBAR API server library
// TipHBAR API 서버 라이브러리
//
// 모듈 구조:
// - domains: 도메인별 모듈 (wallet, tip)
// - shared: 공유 모듈 (clients, config, errors, services)
// - routes: 라우팅 설정

pub mod domains;
pub mod routes;
pub mod shared;
