//! 애플리케이션 전역 에러 타입
//!
//! 고객 서비스의 모든 계층(Handler → Service → Repository)이 공유하는 에러 체계입니다.
//! `thiserror`로 `Display`를 구현하며, 각 variant의 메시지는 그대로 응답 봉투(envelope)의
//! `description` 필드로 노출됩니다.
//!
//! ## 에러 카테고리
//!
//! ### 1. 입력 에러 (BadInput)
//! - `BadParamInput`: 저장소 계층에서 다시 검증한 파라미터가 잘못됨
//! - `InvalidJson`: 요청 본문이 JSON 객체로 해석되지 않음
//! - `InvalidUuid`: 경로의 고객 UUID 형식이 잘못됨
//!
//! ### 2. 검증 에러 (ValidationFailed)
//! - `ValidationError`: 필드 규칙 위반 메시지 목록 (첫 실패에서 멈추지 않고 모두 수집)
//!
//! ### 3. 충돌 에러 (Conflict)
//! - `EmailExists`, `PhoneExists`: 삭제되지 않은 다른 고객이 같은 값을 사용 중
//!
//! ### 4. 조회 실패 (NotFound)
//! - `NotFound`: 고객이 없거나 소프트 삭제됨
//! - `NotFoundOnDb`: 저장소 전용 not-found, 서비스 계층에서 `NotFound`로 정규화됨
//!
//! ### 5. 저장소 에러 (StorageFailure / DatabaseUnavailable)
//! - `DatabaseError`: 드라이버 에러 원문은 로그에만 남기고 일반 메시지로 응답
//! - `DatabaseUnavailable`: 헬스체크 프로브 실패
//!
//! ## HTTP 매핑
//!
//! 기존 클라이언트와의 호환을 위해 모든 에러는 `404 Not Found`로 응답합니다.
//!
//! ```json
//! {"status": false, "description": "Email already exists", "data": null}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::dto::ApiResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Given Param is not valid")]
    BadParamInput,

    #[error("Invalid JSON object")]
    InvalidJson,

    #[error("Customer UUID is not valid")]
    InvalidUuid,

    /// 필드 검증 실패
    ///
    /// 규칙 순서대로 수집된 메시지 목록을 가지며, 응답의 `data`에 배열로 담깁니다.
    #[error("Information Could not be sent. Please Check Errors")]
    ValidationError(Vec<String>),

    #[error("Email already exists")]
    EmailExists,

    #[error("Phone already exists")]
    PhoneExists,

    #[error("requested is not found")]
    NotFound,

    /// 저장소 계층 전용 not-found
    ///
    /// 수정 대상 행이 없을 때 저장소가 반환합니다. 서비스 계층이 `NotFound`로 바꿔
    /// 상위 계층은 저장소 고유 에러를 알 필요가 없습니다.
    #[error("Element not found on DB")]
    NotFoundOnDb,

    /// 일반 SQL 에러
    ///
    /// 드라이버 에러 내용은 응답에 포함하지 않습니다.
    #[error("Internal Database Error, Try Later")]
    DatabaseError,

    #[error("Database unaccessible")]
    DatabaseUnavailable,

    /// 내부 서버 에러
    ///
    /// 상세 내용은 로그용이며 응답에는 고정 메시지만 나갑니다.
    #[error("Internal Server Error")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    /// 에러를 응답 봉투로 변환합니다.
    ///
    /// `ValidationError`만 `data`에 메시지 목록을 싣고, 나머지는 `data: null`입니다.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(messages) => {
                ApiResponse::failure_with(self.to_string(), messages.clone())
            }
            _ => ApiResponse::failure(self.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
