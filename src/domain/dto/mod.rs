//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 계층과 서비스 계층 사이에서 교환되는 데이터 구조입니다.
//! 모든 응답은 [`ApiResponse`] 봉투로 감싸집니다.

pub mod api_response;
pub mod customers;

pub use api_response::*;
pub use customers::*;
