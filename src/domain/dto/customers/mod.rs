//! # Customer Data Transfer Objects Module
//!
//! 고객 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! customers/
//! ├── request/                    # 클라이언트 → 서버
//! │   ├── customer_request.rs     # 생성/수정 본문 + 검증 규칙
//! │   └── page_query.rs           # 목록 조회 쿼리
//! └── response/                   # 서버 → 클라이언트
//!     └── customer_response.rs    # 단건/목록 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
