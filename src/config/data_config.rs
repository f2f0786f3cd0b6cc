//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 요청 제한 관련 설정을 관리합니다.

use std::env;
use log::Level;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
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

    /// 개발 계열 환경인지 확인합니다 (CORS 등에서 사용).
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// 프로필별 `.env` 파일을 로드합니다
///
/// * `prod` - .env.prod 파일 로드
/// * `dev` - .env.dev 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 직접 로그를 남기지 않고,
/// 남길 메시지를 레벨과 함께 반환합니다.
pub fn load_profile_env(profile: &str) -> Vec<(Level, String)> {
    let mut messages = vec![(Level::Info, format!("Current profile: {}", profile))];

    let file = match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv::dotenv().ok();
            messages.push((Level::Info, "기본 .env 파일 로드".to_string()));
            return messages;
        }
    };

    match dotenv::from_filename(file) {
        Ok(_) => messages.push((Level::Info, format!("{} 파일 로드 됨", file))),
        Err(e) => messages.push((Level::Error, format!("{} 파일 로드 실패: {}", file, e))),
    }

    messages
}

/// 역할 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleStoreKind {
    /// MongoDB `roles` 컬렉션
    Mongo,
    /// 프로세스 메모리 (재시작 시 초기화됨)
    Memory,
}

impl RoleStoreKind {
    /// `ROLE_STORE` 환경 변수에서 저장소 종류를 읽습니다. 기본값: `Mongo`
    pub fn current() -> Self {
        Self::from_str(&env::var("ROLE_STORE").unwrap_or_default())
    }

    /// 알 수 없는 값인 경우 `Mongo`를 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => RoleStoreKind::Memory,
            _ => RoleStoreKind::Mongo,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI. 기본값: "mongodb://localhost:27017"
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름. 기본값: "users_dev"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "users_dev".to_string())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(100);

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(200);

        Self { per_second, burst_size }
    }
}
