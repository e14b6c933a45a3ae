//! 도메인 엔티티 모듈
//!
//! 영속 저장소의 행(row)에 대응하는 타입을 정의합니다.

pub mod customers;

pub use customers::*;
