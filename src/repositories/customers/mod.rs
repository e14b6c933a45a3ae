//! 고객 데이터 액세스 계층
//!
//! [`CustomerRepository`] trait이 저장소 계약을 정의하고, 두 구현체가 이를 만족합니다.
//!
//! - [`MySqlCustomerRepository`]: sqlx 기반 실제 저장소
//! - [`InMemoryCustomerRepository`]: 동일한 의미론을 가진 메모리 저장소 (테스트용)
//!
//! 서비스 계층은 `Arc<dyn CustomerRepository>`만 알기 때문에 구현체를 자유롭게 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::customers::{CustomerRepository, MySqlCustomerRepository};
//!
//! let repo: Arc<dyn CustomerRepository> = Arc::new(MySqlCustomerRepository::new(pool));
//! let customer = repo.get_by_uuid("039d69ee-f9cb-4a3d-87e4-6eb63c302579").await?;
//! ```

pub mod memory_customer_repo;
pub mod mysql_customer_repo;

pub use memory_customer_repo::InMemoryCustomerRepository;
pub use mysql_customer_repo::MySqlCustomerRepository;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::Customer;
use crate::domain::models::CustomerPage;

/// 고객 저장소 계약
///
/// 모든 조회/수정은 소프트 삭제되지 않은 행만 대상으로 합니다.
/// 드라이버 에러는 구현체 안에서 [`AppError`](crate::core::errors::AppError) 분류로 변환되어야 합니다.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 저장소 접속 가능 여부를 확인합니다.
    async fn health_check(&self) -> AppResult<()>;

    /// UUID로 고객 한 명을 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::BadParamInput)` - UUID 형식이 잘못된 경우
    /// * `Err(AppError::NotFound)` - 없거나 삭제된 경우
    async fn get_by_uuid(&self, uuid: &str) -> AppResult<Customer>;

    /// 최근 생성 순으로 한 페이지를 조회합니다.
    async fn fetch(&self, page: i64, limit: i64) -> AppResult<CustomerPage>;

    /// 새 고객을 저장하고 생성된 UUID를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::EmailExists)` / `Err(AppError::PhoneExists)` - 중복
    async fn store(&self, customer: Customer) -> AppResult<String>;

    /// 비어 있지 않은 필드만 덮어씁니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFoundOnDb)` - 대상 행이 없거나 이미 삭제된 경우
    async fn update_by_uuid(&self, customer: Customer, uuid: &str) -> AppResult<()>;

    /// 삭제 시각을 기록합니다 (소프트 삭제).
    async fn delete_by_uuid(&self, uuid: &str) -> AppResult<()>;
}
