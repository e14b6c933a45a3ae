//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 기동 시 저장소를 주입받아 생성되고 `web::Data`로 핸들러에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::customers::CustomerService;
//!
//! let service = web::Data::new(CustomerService::new(repo));
//! ```

pub mod customers;
