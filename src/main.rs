//! 사용자 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 역할 저장소(MongoDB 또는 메모리), 텍스트 번들, Mailgun 게이트웨이를 구성한 뒤
//! 역할 관리와 메일 발송 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info, warn};
use users_service_backend::config::{
    load_profile_env, Environment, MailgunConfig, RateLimitConfig, RoleStoreKind, SenderConfig,
    ServerConfig, TemplateConfig,
};
use users_service_backend::db::Database;
use users_service_backend::errors::AppError;
use users_service_backend::repositories::roles::{InMemoryRoleStore, RoleRepository, RoleStore};
use users_service_backend::routes::configure_all_routes;
use users_service_backend::services::email::{EmailService, MailgunGateway};
use users_service_backend::services::roles::RoleService;
use users_service_backend::services::text::BundleTextService;

/// 애플리케이션 전역 서비스 묶음
struct AppServices {
    roles: web::Data<RoleService>,
    email: web::Data<EmailService>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // .env 로드 후 로깅 초기화, 로드 결과는 로거가 준비된 뒤 출력
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_messages = load_profile_env(&profile);
    init_logging();
    for (level, message) in env_messages {
        log::log!(level, "{}", message);
    }

    info!("🚀 사용자 서비스 시작중... ({:?})", Environment::current());

    let services = initialize_services().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(services).await
}

/// 데이터 저장소와 서비스를 구성합니다
///
/// 필수 설정 누락, MongoDB 연결 실패, 텍스트 번들 로딩 실패 시 에러를 반환하며
/// 애플리케이션은 시작되지 않습니다.
async fn initialize_services() -> Result<AppServices, AppError> {
    let role_store = initialize_role_store().await?;

    let templates = TemplateConfig::from_env();
    let text = BundleTextService::load_dir(&templates.text_dir)?;
    let gateway = MailgunGateway::new(MailgunConfig::from_env()?)?;
    info!("📧 Mailgun 게이트웨이: {}", gateway.messages_url());

    let email = EmailService::new(
        Arc::new(text),
        Arc::new(gateway),
        SenderConfig::from_env()?,
        templates.mail_dir,
    );

    Ok(AppServices {
        roles: web::Data::new(RoleService::new(role_store)),
        email: web::Data::new(email),
    })
}

/// `ROLE_STORE` 설정에 따라 역할 저장소를 구성합니다
///
/// `memory`이면 MongoDB에 연결하지 않습니다.
async fn initialize_role_store() -> Result<Arc<dyn RoleStore>, AppError> {
    match RoleStoreKind::current() {
        RoleStoreKind::Memory => {
            warn!("🧪 메모리 역할 저장소 사용 중 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(InMemoryRoleStore::new()))
        }
        RoleStoreKind::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new().await?;
            info!("✅ MongoDB 연결 성공: {}", database.database_name());

            let role_repository = RoleRepository::new(database);
            role_repository.create_indexes().await?;
            Ok(Arc::new(role_repository))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(services: AppServices) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let AppServices { roles, email } = services;

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(roles.clone())
            .app_data(email.clone())

            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `info,actix_web=debug`를 사용합니다.
///
/// ```bash
/// RUST_LOG=users_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 개발 환경에서는 모든 Origin을 허용하고,
/// 그 외에는 로컬 프론트엔드 개발 서버와 자체 서버 Origin만 허용합니다.
fn configure_cors() -> Cors {
    if Environment::current().is_development() {
        return Cors::permissive();
    }

    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
