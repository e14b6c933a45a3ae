//! # MySQL 고객 리포지토리
//!
//! `customers` 테이블에 대한 sqlx 기반 구현체입니다.
//!
//! ## 특징
//!
//! - **파라미터 바인딩**: 모든 값은 `?` 자리표시자로 바인딩되며 SQL에 직접 삽입되지 않습니다
//! - **소프트 삭제**: 모든 쿼리가 `deleted_at IS NULL` 조건을 가집니다
//! - **중복 선검사**: 쓰기 전에 email, phone 순서로 존재 여부를 확인합니다
//! - **부분 수정**: 엔티티의 고정 컬럼 매핑과 `QueryBuilder`로 SET 목록을 조립합니다
//!
//! ## 에러 변환
//!
//! | 드라이버 상황 | AppError |
//! |---------------|----------|
//! | `RowNotFound` | `NotFound` |
//! | 영향받은 행 0 (수정) | `NotFoundOnDb` |
//! | 영향받은 행 0 (삭제) | `NotFound` |
//! | 유니크 키 위반 | `EmailExists` / `PhoneExists` |
//! | 그 외 | `DatabaseError` (원문은 로그에만 기록) |

use async_trait::async_trait;
use log::{debug, error, warn};
use sqlx::{Connection, MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Customer;
use crate::domain::models::{CustomerPage, page_count, page_offset};
use crate::repositories::customers::CustomerRepository;
use crate::utils::password::hash_if_present;
use crate::utils::string_utils::is_valid_uuid;

const SELECT_CUSTOMER_BY_UUID: &str = "SELECT name, last_name, dni, dni_type, email, phone, customer_uuid, country \
     FROM customers WHERE customer_uuid = ? AND deleted_at IS NULL LIMIT 1";

const SELECT_CUSTOMERS_PAGE: &str = "SELECT name, last_name, dni, dni_type, email, phone, customer_uuid, country \
     FROM customers WHERE deleted_at IS NULL ORDER BY id DESC LIMIT ? OFFSET ?";

const COUNT_CUSTOMERS: &str = "SELECT COUNT(id) AS total FROM customers WHERE deleted_at IS NULL";

const INSERT_CUSTOMER: &str = "INSERT INTO customers \
     (customer_uuid, name, last_name, dni, dni_type, email, phone, country, password, created_at, updated_at, deleted_at) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, NULL, NULL)";

const SOFT_DELETE_CUSTOMER: &str = "UPDATE customers SET deleted_at = CURRENT_TIMESTAMP \
     WHERE customer_uuid = ? AND deleted_at IS NULL LIMIT 1";

/// 중복 검사 대상 컬럼
///
/// 컬럼 이름은 이 enum에서만 나오므로 SQL에 직접 넣어도 안전합니다.
#[derive(Debug, Clone, Copy, PartialEq)]
enum UniqueColumn {
    Email,
    Phone,
}

impl UniqueColumn {
    fn column(self) -> &'static str {
        match self {
            UniqueColumn::Email => "email",
            UniqueColumn::Phone => "phone",
        }
    }

    fn conflict(self) -> AppError {
        match self {
            UniqueColumn::Email => AppError::EmailExists,
            UniqueColumn::Phone => AppError::PhoneExists,
        }
    }

    fn exists_query(self, exclude_uuid: bool) -> String {
        let scope = if exclude_uuid {
            " AND customer_uuid != ?"
        } else {
            ""
        };
        format!(
            "SELECT EXISTS(SELECT id FROM customers WHERE {} = ?{} AND deleted_at IS NULL)",
            self.column(),
            scope
        )
    }
}

/// MySQL 기반 고객 리포지토리
///
/// 공유 연결 풀 핸들만 가지며, 요청 간 상태를 보관하지 않습니다.
#[derive(Clone)]
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// 삭제되지 않은 다른 고객이 같은 값을 사용 중인지 확인합니다.
    ///
    /// 값이 비어 있으면 검사하지 않습니다.
    /// `exclude_uuid`가 있으면 해당 고객 자신은 제외합니다 (수정 시).
    async fn exists(
        &self,
        column: UniqueColumn,
        value: &str,
        exclude_uuid: Option<&str>,
    ) -> AppResult<bool> {
        if value.is_empty() {
            return Ok(false);
        }

        let sql = column.exists_query(exclude_uuid.is_some());
        let mut query = sqlx::query_scalar::<_, i64>(&sql).bind(value);
        if let Some(uuid) = exclude_uuid {
            query = query.bind(uuid);
        }

        let found = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("exists", e))?;

        Ok(found > 0)
    }

    /// email, phone 순서로 중복을 검사합니다.
    async fn ensure_unique(&self, customer: &Customer, exclude_uuid: Option<&str>) -> AppResult<()> {
        for column in [UniqueColumn::Email, UniqueColumn::Phone] {
            let value = match column {
                UniqueColumn::Email => customer.email.as_str(),
                UniqueColumn::Phone => customer.phone.as_str(),
            };

            if self.exists(column, value, exclude_uuid).await? {
                debug!("{} already in use", column.column());
                return Err(column.conflict());
            }
        }
        Ok(())
    }
}

/// 부분 수정 쿼리를 조립합니다.
///
/// 비어 있지 않은 필드만 SET 목록에 들어가며 `updated_at`은 항상 갱신됩니다.
/// `password`는 이미 해시된 값이어야 합니다.
pub(crate) fn build_update_query<'a>(customer: &Customer, uuid: &'a str) -> QueryBuilder<'a, MySql> {
    let mut builder = QueryBuilder::<MySql>::new("UPDATE customers SET ");

    for (column, value) in customer.update_columns() {
        builder
            .push(column)
            .push(" = ")
            .push_bind(value.to_string())
            .push(", ");
    }

    builder
        .push("updated_at = CURRENT_TIMESTAMP WHERE customer_uuid = ")
        .push_bind(uuid)
        .push(" AND deleted_at IS NULL LIMIT 1");

    builder
}

/// 드라이버 에러를 기록하고 일반 SQL 에러로 변환합니다.
fn database_error(operation: &str, err: sqlx::Error) -> AppError {
    error!("customers.{} failed: {}", operation, err);
    AppError::DatabaseError
}

/// 쓰기 쿼리 에러 변환
///
/// 유니크 키 위반은 메시지에 포함된 인덱스/컬럼 이름으로 충돌 종류를 판단합니다.
fn write_error(operation: &str, err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            let message = db_err.message().to_lowercase();
            warn!("customers.{} unique violation: {}", operation, message);
            if message.contains("email") {
                return AppError::EmailExists;
            }
            if message.contains("phone") {
                return AppError::PhoneExists;
            }
        }
    }
    database_error(operation, err)
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    /// 연결 하나를 획득해 ping을 보냅니다.
    ///
    /// 실패하면 풀을 닫습니다. 이후 이 풀로는 다시 연결할 수 없습니다.
    async fn health_check(&self) -> AppResult<()> {
        let probe = async {
            let mut conn = self.pool.acquire().await?;
            conn.ping().await?;
            Ok::<(), sqlx::Error>(())
        };

        if let Err(e) = probe.await {
            error!("database ping failed, closing pool: {}", e);
            self.pool.close().await;
            return Err(AppError::DatabaseUnavailable);
        }
        Ok(())
    }

    async fn get_by_uuid(&self, uuid: &str) -> AppResult<Customer> {
        if !is_valid_uuid(uuid) {
            return Err(AppError::BadParamInput);
        }

        sqlx::query_as::<_, Customer>(SELECT_CUSTOMER_BY_UUID)
            .bind(uuid)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => AppError::NotFound,
                other => database_error("get_by_uuid", other),
            })
    }

    async fn fetch(&self, page: i64, limit: i64) -> AppResult<CustomerPage> {
        let total_rows = sqlx::query_scalar::<_, i64>(COUNT_CUSTOMERS)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("count", e))?;

        let offset = page_offset(page, limit);
        let customers = sqlx::query_as::<_, Customer>(SELECT_CUSTOMERS_PAGE)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("fetch", e))?;

        Ok(CustomerPage {
            customers,
            total_rows,
            pages: page_count(total_rows, limit),
            current_page: page,
        })
    }

    async fn store(&self, customer: Customer) -> AppResult<String> {
        self.ensure_unique(&customer, None).await?;

        let uuid = Uuid::new_v4().to_string();
        let password = hash_if_present(&customer.password)?;

        sqlx::query(INSERT_CUSTOMER)
            .bind(&uuid)
            .bind(&customer.name)
            .bind(&customer.last_name)
            .bind(&customer.dni)
            .bind(&customer.dni_type)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(&customer.country)
            .bind(password)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("store", e))?;

        Ok(uuid)
    }

    async fn update_by_uuid(&self, mut customer: Customer, uuid: &str) -> AppResult<()> {
        self.ensure_unique(&customer, Some(uuid)).await?;

        customer.password = hash_if_present(&customer.password)?.unwrap_or_default();

        let result = build_update_query(&customer, uuid)
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("update_by_uuid", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFoundOnDb);
        }
        Ok(())
    }

    async fn delete_by_uuid(&self, uuid: &str) -> AppResult<()> {
        let result = sqlx::query(SOFT_DELETE_CUSTOMER)
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete_by_uuid", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
