//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 9000
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse()
            .unwrap_or(9000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MySQL 연결 설정
///
/// `DATABASE_URL`이 있으면 그대로 사용하고, 없으면 `MYSQL_*` 변수로 조립합니다.
///
/// ```bash
/// export MYSQL_HOST="localhost"
/// export MYSQL_PORT="3306"
/// export MYSQL_USER="root"
/// export MYSQL_PASS="secret"
/// export MYSQL_DB="customers"
/// ```
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 연결 옵션을 생성합니다.
    ///
    /// # Errors
    ///
    /// `DATABASE_URL` 형식이 잘못된 경우 `sqlx::Error::Configuration`
    pub fn connect_options() -> Result<MySqlConnectOptions, sqlx::Error> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return MySqlConnectOptions::from_str(&url);
        }

        let port = Self::lookup("MYSQL_PORT", "3306")
            .parse::<u16>()
            .unwrap_or(3306);

        Ok(MySqlConnectOptions::new()
            .host(&Self::lookup("MYSQL_HOST", "localhost"))
            .port(port)
            .username(&Self::lookup("MYSQL_USER", "root"))
            .password(&Self::lookup("MYSQL_PASS", ""))
            .database(&Self::lookup("MYSQL_DB", "customers")))
    }

    /// 로그 출력용 연결 대상 설명 (비밀번호 제외)
    pub fn describe() -> String {
        if env::var("DATABASE_URL").is_ok() {
            return "DATABASE_URL".to_string();
        }
        format!(
            "mysql://{}@{}:{}/{}",
            env::var("MYSQL_USER").unwrap_or_else(|_| "root".to_string()),
            env::var("MYSQL_HOST").unwrap_or_else(|_| "localhost".to_string()),
            env::var("MYSQL_PORT").unwrap_or_else(|_| "3306".to_string()),
            env::var("MYSQL_DB").unwrap_or_else(|_| "customers".to_string()),
        )
    }

    /// 풀의 최대 연결 수. 기본값: 10
    pub fn max_connections() -> u32 {
        env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10)
            .max(1)
    }

    /// 연결 획득 타임아웃. 기본값: 30초
    pub fn acquire_timeout() -> Duration {
        let secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30)
            .max(1);
        Duration::from_secs(secs)
    }

    fn lookup(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| {
            log::warn!("{} not set, using default", key);
            default.to_string()
        })
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록. 비어 있으면 모든 Origin을 허용합니다.
    ///
    /// `CORS_ALLOWED_ORIGINS="http://localhost:3000,https://admin.example.com"`
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
