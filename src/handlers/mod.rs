//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 파싱, 검증, 응답 봉투        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   CustomerService - 유스케이스                   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   CustomerRepository - SQL / 인메모리            ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`health`**: 헬스체크 (`GET /healthcheck`)
//! - **`customers`**: 고객 CRUD (`GET|POST /`, `GET|PUT|DELETE /{customer_uuid}`)
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하고 `?`로 에러를 전파합니다.
//! 응답 변환은 `AppError`의 `ResponseError` 구현이 담당합니다.
//!
//! ```rust,ignore
//! #[get("/{customer_uuid}")]
//! pub async fn get_customer(
//!     service: web::Data<CustomerService>,
//!     customer_uuid: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let customer = service.get_by_uuid(&customer_uuid).await?;
//!     Ok(ApiResponse::success("Customer Found", CustomerResponse::from(customer)).ok())
//! }
//! ```

pub mod customers;
pub mod health;
