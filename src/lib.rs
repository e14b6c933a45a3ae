//! 고객 서비스 백엔드
//!
//! 단일 "고객" 리소스를 관리하는 HTTP/JSON CRUD 마이크로서비스입니다.
//! 요청 검증, 유스케이스, SQL 매핑의 세 계층으로 구성되며
//! 모든 응답은 `{status, description, data}` 봉투로 나갑니다.
//!
//! # Features
//!
//! - **고객 관리**: 생성, 단건/목록 조회, 부분 수정, 소프트 삭제
//! - **검증**: 규칙 순서가 고정된 필드 검증, 위반 메시지 전체 보고
//! - **중복 방지**: 삭제되지 않은 고객 간 email/phone 유일성 검사
//! - **비밀번호**: bcrypt 해시로만 저장, 응답에는 절대 포함되지 않음
//! - **MySQL**: sqlx 연결 풀 기반 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 파싱, 검증, 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 유스케이스 (에러 정규화)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← SQL, 중복 검사, 페이지 계산
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      MySQL      │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use customer_service_backend::db::Database;
//! use customer_service_backend::repositories::customers::MySqlCustomerRepository;
//! use customer_service_backend::services::customers::CustomerService;
//!
//! let database = Database::connect().await?;
//! let repo = Arc::new(MySqlCustomerRepository::new(database.pool().clone()));
//! let service = CustomerService::new(repo);
//!
//! let page = service.fetch(1, 10).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
