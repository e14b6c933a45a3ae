//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 기동 시 명시적으로 생성되어 서비스에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::customers::MySqlCustomerRepository;
//!
//! let repo = Arc::new(MySqlCustomerRepository::new(database.pool().clone()));
//! let service = CustomerService::new(repo);
//! ```

pub mod customers;
