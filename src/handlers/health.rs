//! 헬스체크 엔드포인트

use actix_web::{HttpResponse, get, web};

use crate::core::errors::AppError;
use crate::domain::dto::ApiResponse;
use crate::services::customers::CustomerService;

/// 저장소 접속 상태를 확인합니다.
///
/// ```bash
/// curl http://localhost:9000/healthcheck
/// ```
///
/// - 성공: `200 {"status":true,"description":"UP","data":null}`
/// - 실패: `404 {"status":false,"description":"Database unaccessible","data":null}`
#[get("/healthcheck")]
pub async fn health_check(service: web::Data<CustomerService>) -> Result<HttpResponse, AppError> {
    service.health_check().await?;
    Ok(ApiResponse::<()>::message("UP").ok())
}
