//! 핵심 공통 모듈
//!
//! 계층 전반에서 사용하는 에러 타입을 제공합니다.

pub mod errors;

pub use errors::*;
