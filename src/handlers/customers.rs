//! # Customer HTTP Handlers
//!
//! 고객 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 description |
//! |--------|------|------|------------------|
//! | `GET` | `/{customer_uuid}` | 단건 조회 | Customer Found |
//! | `GET` | `/?page=&limit=` | 목록 조회 | Customers Found |
//! | `POST` | `/` | 생성 | Customer was created. |
//! | `PUT` | `/{customer_uuid}` | 부분 수정 | Customer Information Updated |
//! | `DELETE` | `/{customer_uuid}` | 소프트 삭제 | Customer records deleted |
//!
//! 모든 에러는 [`AppError`]의 `ResponseError` 구현을 통해 `404`와 응답 봉투로 변환됩니다.
//! 요청 본문 파싱 실패는 라우트 설정의 `JsonConfig`가 `InvalidJson`으로 바꿉니다.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};

use crate::core::errors::AppError;
use crate::domain::dto::{
    ApiResponse, CustomerPageResponse, CustomerRequest, CustomerResponse, PageQuery,
};
use crate::services::customers::CustomerService;
use crate::utils::string_utils::is_valid_uuid;

fn parse_uuid(customer_uuid: web::Path<String>) -> Result<String, AppError> {
    let uuid = customer_uuid.into_inner();
    if !is_valid_uuid(&uuid) {
        return Err(AppError::InvalidUuid);
    }
    Ok(uuid)
}

/// UUID로 고객을 조회합니다.
///
/// # 응답 예시
///
/// ```json
/// {
///   "status": true,
///   "description": "Customer Found",
///   "data": {"customer": {"id": "039d69ee-...", "name": "Eddwin", "country": "CL"}}
/// }
/// ```
#[get("/{customer_uuid}")]
pub async fn get_customer(
    service: web::Data<CustomerService>,
    customer_uuid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let uuid = parse_uuid(customer_uuid)?;
    let customer = service.get_by_uuid(&uuid).await?;

    Ok(ApiResponse::success("Customer Found", CustomerResponse::from(customer)).ok())
}

/// 고객 목록을 최근 생성 순으로 조회합니다.
///
/// 쿼리 파라미터는 [`PageQuery::resolve`] 규칙으로 해석되며, 잘못된 값은 기본값으로 대체됩니다.
#[get("/")]
pub async fn fetch_customers(
    service: web::Data<CustomerService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let (page, limit) = PageQuery::from_query_str(req.query_string()).resolve();
    let result = service.fetch(page, limit).await?;

    Ok(ApiResponse::success("Customers Found", CustomerPageResponse::from(result)).ok())
}

/// 새 고객을 생성합니다.
///
/// ```bash
/// curl -X POST http://localhost:9000/ \
///   -d '{"name":"Bad","last_name":"Bunny","email":"baby@gmail.com","country":"CL"}'
/// ```
#[post("/")]
pub async fn store_customer(
    service: web::Data<CustomerService>,
    payload: web::Json<CustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate_store()?;

    service.store(request.into()).await?;

    Ok(ApiResponse::<()>::message("Customer was created.").ok())
}

/// 고객 정보를 부분 수정합니다.
///
/// 비어 있지 않은 필드만 반영됩니다. 경로의 UUID는 형식 검사 없이 저장소로 전달되며,
/// 일치하는 고객이 없으면 `requested is not found`입니다.
#[put("/{customer_uuid}")]
pub async fn update_customer(
    service: web::Data<CustomerService>,
    customer_uuid: web::Path<String>,
    payload: web::Json<CustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate_update()?;

    service
        .update_by_uuid(request.into(), &customer_uuid.into_inner())
        .await?;

    Ok(ApiResponse::<()>::message("Customer Information Updated").ok())
}

#[delete("/{customer_uuid}")]
pub async fn delete_customer(
    service: web::Data<CustomerService>,
    customer_uuid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let uuid = parse_uuid(customer_uuid)?;
    service.delete_by_uuid(&uuid).await?;

    Ok(ApiResponse::<()>::message("Customer records deleted").ok())
}
