//! 고객 유스케이스 서비스 모듈
//!
//! [`CustomerService`](customer_service::CustomerService)가 핸들러와 저장소 사이를 중계합니다.

pub mod customer_service;

pub use customer_service::CustomerService;
