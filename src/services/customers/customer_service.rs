//! # 고객 유스케이스 서비스
//!
//! 검증을 통과한 요청을 저장소로 전달하는 얇은 계층입니다.
//!
//! ```text
//! Handler ──▶ CustomerService ──▶ dyn CustomerRepository
//!                                   ├─ MySqlCustomerRepository
//!                                   └─ InMemoryCustomerRepository
//! ```
//!
//! ## 에러 정규화
//!
//! 수정 시 저장소가 반환하는 `NotFoundOnDb`만 `NotFound`로 바꿉니다.
//! 헬스체크 실패는 원인과 관계없이 `DatabaseUnavailable`입니다.
//! 그 외 에러는 그대로 전달됩니다.

use std::sync::Arc;

use log::{info, warn};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Customer;
use crate::domain::models::CustomerPage;
use crate::repositories::customers::CustomerRepository;

/// 고객 유스케이스 서비스
///
/// 기동 시 저장소를 주입받아 생성되며 `web::Data`로 핸들러에 공유됩니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// let repo = Arc::new(MySqlCustomerRepository::new(database.pool().clone()));
/// let service = web::Data::new(CustomerService::new(repo));
/// ```
#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.repo.health_check().await.map_err(|e| {
            warn!("헬스체크 실패: {}", e);
            AppError::DatabaseUnavailable
        })
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> AppResult<Customer> {
        self.repo.get_by_uuid(uuid).await
    }

    pub async fn fetch(&self, page: i64, limit: i64) -> AppResult<CustomerPage> {
        self.repo.fetch(page, limit).await
    }

    /// 새 고객을 저장하고 생성된 UUID를 반환합니다.
    pub async fn store(&self, customer: Customer) -> AppResult<String> {
        let uuid = self.repo.store(customer).await?;
        info!("고객 생성: {}", uuid);
        Ok(uuid)
    }

    /// 고객 정보를 부분 수정합니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - 대상이 없거나 삭제된 경우 (`NotFoundOnDb`에서 변환)
    pub async fn update_by_uuid(&self, customer: Customer, uuid: &str) -> AppResult<()> {
        match self.repo.update_by_uuid(customer, uuid).await {
            Ok(()) => {
                info!("고객 정보 수정: {}", uuid);
                Ok(())
            }
            Err(AppError::NotFoundOnDb) => Err(AppError::NotFound),
            Err(e) => Err(e),
        }
    }

    pub async fn delete_by_uuid(&self, uuid: &str) -> AppResult<()> {
        self.repo.delete_by_uuid(uuid).await?;
        info!("고객 삭제: {}", uuid);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::customers::InMemoryCustomerRepository;
    use async_trait::async_trait;

    /// 모든 호출에 같은 에러를 반환하는 저장소
    struct FailingRepository(AppError);

    #[async_trait]
    impl CustomerRepository for FailingRepository {
        async fn health_check(&self) -> AppResult<()> {
            Err(self.0.clone())
        }

        async fn get_by_uuid(&self, _uuid: &str) -> AppResult<Customer> {
            Err(self.0.clone())
        }

        async fn fetch(&self, _page: i64, _limit: i64) -> AppResult<CustomerPage> {
            Err(self.0.clone())
        }

        async fn store(&self, _customer: Customer) -> AppResult<String> {
            Err(self.0.clone())
        }

        async fn update_by_uuid(&self, _customer: Customer, _uuid: &str) -> AppResult<()> {
            Err(self.0.clone())
        }

        async fn delete_by_uuid(&self, _uuid: &str) -> AppResult<()> {
            Err(self.0.clone())
        }
    }

    fn failing(error: AppError) -> CustomerService {
        CustomerService::new(Arc::new(FailingRepository(error)))
    }

    #[actix_web::test]
    async fn test_update_not_found_on_db_is_normalized() {
        let service = failing(AppError::NotFoundOnDb);

        assert_eq!(
            service.update_by_uuid(Customer::default(), "x").await,
            Err(AppError::NotFound)
        );
    }

    #[actix_web::test]
    async fn test_other_errors_pass_through() {
        let service = failing(AppError::EmailExists);

        assert_eq!(
            service.update_by_uuid(Customer::default(), "x").await,
            Err(AppError::EmailExists)
        );
        assert_eq!(
            service.store(Customer::default()).await,
            Err(AppError::EmailExists)
        );

        let service = failing(AppError::NotFoundOnDb);
        assert_eq!(
            service.delete_by_uuid("x").await,
            Err(AppError::NotFoundOnDb)
        );
    }

    #[actix_web::test]
    async fn test_health_check_failure_is_database_unavailable() {
        let service = failing(AppError::DatabaseError);

        assert_eq!(service.health_check().await, Err(AppError::DatabaseUnavailable));
    }

    #[actix_web::test]
    async fn test_update_missing_customer_through_memory_store() {
        let service = CustomerService::new(Arc::new(InMemoryCustomerRepository::new()));
        let changes = Customer {
            name: "Jhon".to_string(),
            ..Default::default()
        };

        assert_eq!(
            service
                .update_by_uuid(changes, "039d69ee-f9cb-4a3d-87e4-6eb63c302579")
                .await,
            Err(AppError::NotFound)
        );
    }
}
