//! # 인메모리 고객 리포지토리
//!
//! MySQL 구현과 같은 의미론을 메모리에서 재현하는 저장소입니다.
//! 핸들러/서비스 테스트가 데이터베이스 없이 실행되도록 사용됩니다.
//!
//! - 소프트 삭제, email/phone 중복 검사, 페이지 오프셋 계산, 부분 수정이 모두 동일합니다
//! - 비밀번호는 bcrypt 해시로만 보관됩니다
//! - [`set_available`](InMemoryCustomerRepository::set_available)로 저장소 장애를 흉내낼 수 있습니다

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Customer;
use crate::domain::models::{CustomerPage, page_count, page_offset};
use crate::repositories::customers::CustomerRepository;
use crate::utils::password::hash_if_present;
use crate::utils::string_utils::is_valid_uuid;

/// 테이블의 한 행에 해당하는 레코드
#[derive(Debug, Clone)]
struct CustomerRecord {
    /// 삽입 순서 (`id` 컬럼)
    seq: u64,
    customer: Customer,
    password_hash: Option<String>,
    deleted_at: Option<DateTime<Utc>>,
}

impl CustomerRecord {
    fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// 부분 수정 컬럼을 적용합니다. `password`는 해시된 값이어야 합니다.
    fn apply(&mut self, changes: &Customer) {
        for (column, value) in changes.update_columns() {
            let value = value.to_string();
            match column {
                "name" => self.customer.name = value,
                "last_name" => self.customer.last_name = value,
                "dni" => self.customer.dni = value,
                "dni_type" => self.customer.dni_type = value,
                "phone" => self.customer.phone = value,
                "country" => self.customer.country = value,
                "email" => self.customer.email = value,
                "password" => self.password_hash = Some(value),
                _ => {}
            }
        }
    }
}

#[derive(Debug, Default)]
struct Table {
    next_seq: u64,
    rows: Vec<CustomerRecord>,
}

impl Table {
    fn live(&self) -> impl Iterator<Item = &CustomerRecord> {
        self.rows.iter().filter(|record| record.is_live())
    }

    fn find_live_mut(&mut self, uuid: &str) -> Option<&mut CustomerRecord> {
        self.rows
            .iter_mut()
            .find(|record| record.is_live() && record.customer.id == uuid)
    }

    fn taken(&self, pick: fn(&Customer) -> &str, value: &str, exclude_uuid: Option<&str>) -> bool {
        !value.is_empty()
            && self.live().any(|record| {
                pick(&record.customer) == value
                    && exclude_uuid.is_none_or(|uuid| record.customer.id != uuid)
            })
    }

    /// email, phone 순서로 중복을 검사합니다. 빈 값은 검사하지 않습니다.
    fn ensure_unique(&self, customer: &Customer, exclude_uuid: Option<&str>) -> AppResult<()> {
        if self.taken(|c| c.email.as_str(), &customer.email, exclude_uuid) {
            return Err(AppError::EmailExists);
        }
        if self.taken(|c| c.phone.as_str(), &customer.phone, exclude_uuid) {
            return Err(AppError::PhoneExists);
        }
        Ok(())
    }
}

/// 인메모리 고객 리포지토리
#[derive(Debug)]
pub struct InMemoryCustomerRepository {
    table: RwLock<Table>,
    available: AtomicBool,
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::default()),
            available: AtomicBool::new(true),
        }
    }

    /// 저장소 접속 가능 여부를 설정합니다.
    ///
    /// `false`이면 헬스체크는 `DatabaseUnavailable`, 나머지 작업은 `DatabaseError`를 반환합니다.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            log::error!("in-memory customer store is unavailable");
            Err(AppError::DatabaseError)
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Table> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn stored_password(&self, uuid: &str) -> Option<String> {
        self.read()
            .rows
            .iter()
            .find(|record| record.customer.id == uuid)
            .and_then(|record| record.password_hash.clone())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn health_check(&self) -> AppResult<()> {
        self.ensure_available()
            .map_err(|_| AppError::DatabaseUnavailable)
    }

    async fn get_by_uuid(&self, uuid: &str) -> AppResult<Customer> {
        if !is_valid_uuid(uuid) {
            return Err(AppError::BadParamInput);
        }
        self.ensure_available()?;

        self.read()
            .live()
            .find(|record| record.customer.id == uuid)
            .map(|record| record.customer.safe())
            .ok_or(AppError::NotFound)
    }

    async fn fetch(&self, page: i64, limit: i64) -> AppResult<CustomerPage> {
        self.ensure_available()?;

        let table = self.read();
        let total_rows = table.live().count() as i64;

        let mut live: Vec<&CustomerRecord> = table.live().collect();
        live.sort_by(|a, b| b.seq.cmp(&a.seq));

        let offset = usize::try_from(page_offset(page, limit)).unwrap_or(0);
        let take = usize::try_from(limit).unwrap_or(0);
        let customers = live
            .into_iter()
            .skip(offset)
            .take(take)
            .map(|record| record.customer.safe())
            .collect();

        Ok(CustomerPage {
            customers,
            total_rows,
            pages: page_count(total_rows, limit),
            current_page: page,
        })
    }

    async fn store(&self, customer: Customer) -> AppResult<String> {
        self.ensure_available()?;
        self.read().ensure_unique(&customer, None)?;

        let password_hash = hash_if_present(&customer.password)?;
        let uuid = Uuid::new_v4().to_string();

        let mut table = self.write();
        table.ensure_unique(&customer, None)?;
        table.next_seq += 1;
        let seq = table.next_seq;
        table.rows.push(CustomerRecord {
            seq,
            customer: Customer {
                id: uuid.clone(),
                password: String::new(),
                ..customer
            },
            password_hash,
            deleted_at: None,
        });

        Ok(uuid)
    }

    async fn update_by_uuid(&self, mut customer: Customer, uuid: &str) -> AppResult<()> {
        self.ensure_available()?;
        self.read().ensure_unique(&customer, Some(uuid))?;

        customer.password = hash_if_present(&customer.password)?.unwrap_or_default();

        let mut table = self.write();
        table.ensure_unique(&customer, Some(uuid))?;
        let record = table.find_live_mut(uuid).ok_or(AppError::NotFoundOnDb)?;
        record.apply(&customer);
        Ok(())
    }

    async fn delete_by_uuid(&self, uuid: &str) -> AppResult<()> {
        self.ensure_available()?;

        let mut table = self.write();
        let record = table.find_live_mut(uuid).ok_or(AppError::NotFound)?;
        record.deleted_at = Some(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(email: &str, phone: &str) -> Customer {
        Customer {
            name: "Bad".to_string(),
            last_name: "Bunny".to_string(),
            dni: "264573076".to_string(),
            dni_type: "DNI".to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            country: "CL".to_string(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_store_then_get_round_trip() {
        let repo = InMemoryCustomerRepository::new();
        let uuid = repo
            .store(customer("baby@gmail.com", "+130698569"))
            .await
            .unwrap();

        let found = repo.get_by_uuid(&uuid).await.unwrap();

        assert_eq!(found.id, uuid);
        assert_eq!(found.name, "Bad");
        assert_eq!(found.email, "baby@gmail.com");
        assert!(found.password.is_empty());
    }

    #[actix_web::test]
    async fn test_password_is_stored_hashed() {
        let repo = InMemoryCustomerRepository::new();
        let uuid = repo
            .store(Customer {
                password: "conejomalo".to_string(),
                ..customer("a@b.com", "")
            })
            .await
            .unwrap();

        let stored = repo.stored_password(&uuid).unwrap();

        assert_ne!(stored, "conejomalo");
        assert!(bcrypt::verify("conejomalo", &stored).unwrap());
    }

    #[actix_web::test]
    async fn test_empty_password_is_not_stored() {
        let repo = InMemoryCustomerRepository::new();
        let uuid = repo.store(customer("a@b.com", "")).await.unwrap();

        assert_eq!(repo.stored_password(&uuid), None);
    }

    #[actix_web::test]
    async fn test_invalid_uuid_is_bad_param() {
        let repo = InMemoryCustomerRepository::new();

        assert_eq!(
            repo.get_by_uuid("not-a-uuid").await,
            Err(AppError::BadParamInput)
        );
    }

    #[actix_web::test]
    async fn test_unknown_uuid_is_not_found() {
        let repo = InMemoryCustomerRepository::new();

        assert_eq!(
            repo.get_by_uuid(&Uuid::new_v4().to_string()).await,
            Err(AppError::NotFound)
        );
    }

    #[actix_web::test]
    async fn test_duplicate_email_checked_before_phone() {
        let repo = InMemoryCustomerRepository::new();
        repo.store(customer("dup@gmail.com", "111")).await.unwrap();

        assert_eq!(
            repo.store(customer("dup@gmail.com", "111")).await,
            Err(AppError::EmailExists)
        );
        assert_eq!(
            repo.store(customer("other@gmail.com", "111")).await,
            Err(AppError::PhoneExists)
        );
    }

    #[actix_web::test]
    async fn test_empty_phones_never_collide() {
        let repo = InMemoryCustomerRepository::new();
        repo.store(customer("one@gmail.com", "")).await.unwrap();

        assert!(repo.store(customer("two@gmail.com", "")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_deleted_customer_releases_email() {
        let repo = InMemoryCustomerRepository::new();
        let uuid = repo.store(customer("dup@gmail.com", "111")).await.unwrap();
        repo.delete_by_uuid(&uuid).await.unwrap();

        assert!(repo.store(customer("dup@gmail.com", "111")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_partial_update_keeps_empty_fields() {
        let repo = InMemoryCustomerRepository::new();
        let uuid = repo.store(customer("a@b.com", "111")).await.unwrap();

        let changes = Customer {
            name: "Jhon".to_string(),
            ..Default::default()
        };
        repo.update_by_uuid(changes, &uuid).await.unwrap();

        let found = repo.get_by_uuid(&uuid).await.unwrap();
        assert_eq!(found.name, "Jhon");
        assert_eq!(found.last_name, "Bunny");
        assert_eq!(found.email, "a@b.com");
    }

    #[actix_web::test]
    async fn test_update_ignores_own_email_but_rejects_others() {
        let repo = InMemoryCustomerRepository::new();
        let first = repo.store(customer("first@b.com", "111")).await.unwrap();
        repo.store(customer("second@b.com", "222")).await.unwrap();

        assert!(
            repo.update_by_uuid(customer("first@b.com", "111"), &first)
                .await
                .is_ok()
        );
        assert_eq!(
            repo.update_by_uuid(customer("second@b.com", ""), &first).await,
            Err(AppError::EmailExists)
        );
        assert_eq!(
            repo.update_by_uuid(customer("", "222"), &first).await,
            Err(AppError::PhoneExists)
        );
    }

    #[actix_web::test]
    async fn test_update_missing_or_deleted_is_not_found_on_db() {
        let repo = InMemoryCustomerRepository::new();
        let uuid = repo.store(customer("a@b.com", "111")).await.unwrap();
        repo.delete_by_uuid(&uuid).await.unwrap();

        assert_eq!(
            repo.update_by_uuid(customer("x@b.com", ""), &uuid).await,
            Err(AppError::NotFoundOnDb)
        );
        assert_eq!(
            repo.update_by_uuid(customer("x@b.com", ""), "missing").await,
            Err(AppError::NotFoundOnDb)
        );
    }

    #[actix_web::test]
    async fn test_delete_twice() {
        let repo = InMemoryCustomerRepository::new();
        let uuid = repo.store(customer("a@b.com", "111")).await.unwrap();

        assert_eq!(repo.delete_by_uuid(&uuid).await, Ok(()));
        assert_eq!(repo.delete_by_uuid(&uuid).await, Err(AppError::NotFound));
        assert_eq!(repo.get_by_uuid(&uuid).await, Err(AppError::NotFound));
    }

    #[actix_web::test]
    async fn test_fetch_orders_newest_first_and_reproduces_offset_clamp() {
        let repo = InMemoryCustomerRepository::new();
        for i in 0..12 {
            repo.store(customer(&format!("c{}@b.com", i), &i.to_string()))
                .await
                .unwrap();
        }

        let first = repo.fetch(1, 5).await.unwrap();
        assert_eq!(first.total_rows, 12);
        assert_eq!(first.pages, 3);
        assert_eq!(first.current_page, 1);
        assert_eq!(first.customers.len(), 5);
        assert_eq!(first.customers[0].email, "c11@b.com");

        let second = repo.fetch(2, 5).await.unwrap();
        let third = repo.fetch(3, 5).await.unwrap();
        assert_eq!(second.customers[0].email, "c6@b.com");
        assert_eq!(third.customers, second.customers);
        assert_eq!(third.current_page, 3);
    }

    #[actix_web::test]
    async fn test_fetch_skips_deleted_rows() {
        let repo = InMemoryCustomerRepository::new();
        let gone = repo.store(customer("a@b.com", "1")).await.unwrap();
        repo.store(customer("b@b.com", "2")).await.unwrap();
        repo.delete_by_uuid(&gone).await.unwrap();

        let page = repo.fetch(1, 10).await.unwrap();

        assert_eq!(page.total_rows, 1);
        assert_eq!(page.pages, 1);
        assert_eq!(page.customers.len(), 1);
    }

    #[actix_web::test]
    async fn test_unavailable_store() {
        let repo = InMemoryCustomerRepository::new();
        repo.set_available(false);

        assert_eq!(repo.health_check().await, Err(AppError::DatabaseUnavailable));
        assert_eq!(repo.fetch(1, 10).await, Err(AppError::DatabaseError));

        repo.set_available(true);
        assert_eq!(repo.health_check().await, Ok(()));
    }
}
