//! 고객 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 계층을 초기화합니다.
//! MySQL 연결 풀을 생성해 저장소와 서비스에 명시적으로 주입한 뒤 REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use customer_service_backend::config::{CorsConfig, DatabaseConfig, ServerConfig};
use customer_service_backend::db::Database;
use customer_service_backend::repositories::customers::MySqlCustomerRepository;
use customer_service_backend::routes::configure_all_routes;
use customer_service_backend::services::customers::CustomerService;
use customer_service_backend::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_complete, print_step_start,
    print_sub_task,
};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("CUSTOMER SERVICE");
    info!("🚀 고객 서비스 시작중...");

    // 데이터베이스 연결 (실패 시 기동 중단)
    print_step_start(1, "데이터베이스 연결");
    let database = Database::connect().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e)
    })?;
    print_sub_task("MySQL", &DatabaseConfig::describe());
    print_step_complete(1, "데이터베이스 연결");

    // 저장소 → 서비스 의존성 주입
    print_step_start(2, "서비스 구성");
    let repository = Arc::new(MySqlCustomerRepository::new(database.pool().clone()));
    let customer_service = web::Data::new(CustomerService::new(repository));
    print_sub_task("CustomerService", "ready");
    print_step_complete(2, "서비스 구성");

    let result = start_http_server(customer_service).await;

    // 서버 종료 후 연결 풀 정리
    database.close().await;
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(customer_service: web::Data<CustomerService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    print_startup_summary(&bind_address, &DatabaseConfig::describe());

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(customer_service.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 또는 미설정 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=customer_service_backend=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`가 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            header::HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
