//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 역할 관리, 메일 발송 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! 핸들러가 사용하는 서비스(`RoleService`, `EmailService`)는
//! 애플리케이션 구성 시 `web::Data`로 등록되어 있어야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(role_service.clone())
//!     .app_data(email_service.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_role_routes(cfg);
    configure_mail_routes(cfg);
}

/// 역할 관련 라우트를 설정합니다
///
/// - `GET /api/v1/roles` - 역할 목록
/// - `GET /api/v1/roles/{name}` - 역할 조회
/// - `PUT /api/v1/roles/{name}` - 역할 생성 또는 권한 교체
/// - `DELETE /api/v1/roles/{name}` - 역할 삭제
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/roles/editor \
///   -H "Content-Type: application/json" \
///   -d '{"privileges":["read","write"]}'
/// ```
fn configure_role_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/roles")
            .service(handlers::roles::list_roles)
            .service(handlers::roles::get_role)
            .service(handlers::roles::put_role)
            .service(handlers::roles::delete_role)
    );
}

/// 메일 발송 라우트를 설정합니다
///
/// - `POST /api/v1/mail/send` - 템플릿 메일 발송
fn configure_mail_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/mail")
            .service(handlers::mail::send_mail)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "users_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "mail_gateway": "Mailgun"
        }
    }))
}
