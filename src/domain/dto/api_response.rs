//! 공통 응답 봉투(envelope)
//!
//! 모든 엔드포인트는 성공/실패와 관계없이 동일한 구조로 응답합니다.
//!
//! ```json
//! {"status": true, "description": "UP", "data": null}
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// `{status, description, data}` 응답 봉투
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub description: String,
    /// 페이로드. 없으면 `null`로 직렬화됩니다.
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(description: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            description: description.into(),
            data: Some(data),
        }
    }

    /// 페이로드 없는 성공 응답
    pub fn message(description: impl Into<String>) -> Self {
        Self {
            status: true,
            description: description.into(),
            data: None,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            status: false,
            description: description.into(),
            data: None,
        }
    }

    pub fn failure_with(description: impl Into<String>, data: T) -> Self {
        Self {
            status: false,
            description: description.into(),
            data: Some(data),
        }
    }

    /// 주어진 상태 코드로 JSON 응답을 만듭니다.
    pub fn respond(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }

    pub fn ok(&self) -> HttpResponse {
        self.respond(StatusCode::OK)
    }
}
