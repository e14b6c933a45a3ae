//! API 라우트 설정 모듈
//!
//! 고객 엔드포인트와 헬스체크를 루트 경로에 등록합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/healthcheck` | [`health::health_check`] |
//! | `GET` | `/` | [`customers::fetch_customers`] |
//! | `POST` | `/` | [`customers::store_customer`] |
//! | `GET` | `/{customer_uuid}` | [`customers::get_customer`] |
//! | `PUT` | `/{customer_uuid}` | [`customers::update_customer`] |
//! | `DELETE` | `/{customer_uuid}` | [`customers::delete_customer`] |
//!
//! `/healthcheck`는 `/{customer_uuid}`보다 먼저 등록되어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(customer_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;

use crate::core::errors::AppError;
use crate::handlers::{customers, health};

/// 모든 라우트와 추출기 설정을 등록합니다.
///
/// JSON 본문은 `Content-Type`과 관계없이 파싱되며,
/// 파싱에 실패하면 `Invalid JSON object` 응답이 나갑니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(health::health_check);
    configure_customer_routes(cfg);
}

fn configure_customer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(customers::fetch_customers)
        .service(customers::store_customer)
        .service(customers::get_customer)
        .service(customers::update_customer)
        .service(customers::delete_customer);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            log::debug!("request body rejected: {}", err);
            AppError::InvalidJson.into()
        })
}
