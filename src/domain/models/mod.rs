//! 도메인 모델 모듈
//!
//! 엔티티는 아니지만 계층 간에 전달되는 값 객체를 정의합니다.

pub mod page;

pub use page::*;
