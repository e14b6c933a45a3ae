//! 도메인 계층
//!
//! - [`entities`] - 영속 저장소 행에 대응하는 엔티티
//! - [`dto`] - HTTP 요청/응답 데이터 구조
//! - [`models`] - 계층 간 값 객체 (페이지네이션 등)

pub mod entities;
pub mod dto;
pub mod models;
