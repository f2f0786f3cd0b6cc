//! # Role Management HTTP Handlers
//!
//! 역할을 이름으로 조회/저장/삭제하는 엔드포인트입니다.
//! 저장소 식별자는 응답에 포함되지 않습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/roles` | 역할 목록 | 200 OK |
//! | `GET` | `/api/v1/roles/{name}` | 역할 조회 | 200 OK / 404 |
//! | `PUT` | `/api/v1/roles/{name}` | 역할 생성 또는 권한 교체 | 201 Created / 200 OK |
//! | `DELETE` | `/api/v1/roles/{name}` | 역할 삭제 | 204 No Content / 404 |

use actix_web::{delete, get, put, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::dto::roles::SaveRoleRequest,
    errors::errors::AppError,
    services::roles::RoleService,
};

/// 역할 목록 조회 핸들러
#[get("")]
pub async fn list_roles(
    service: web::Data<RoleService>,
) -> Result<HttpResponse, AppError> {
    let roles = service.list_roles().await?;
    Ok(HttpResponse::Ok().json(roles))
}

/// 역할 조회 핸들러
///
/// ```bash
/// curl http://localhost:8080/api/v1/roles/editor
/// ```
#[get("/{name}")]
pub async fn get_role(
    service: web::Data<RoleService>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let role = service.get_role(&name).await?;
    Ok(HttpResponse::Ok().json(role))
}

/// 역할 저장 핸들러
///
/// 같은 이름의 역할이 없으면 생성(201), 있으면 권한 집합을 교체(200)합니다.
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/roles/editor \
///   -H "Content-Type: application/json" \
///   -d '{"privileges": ["read", "write"]}'
/// ```
#[put("/{name}")]
pub async fn put_role(
    service: web::Data<RoleService>,
    name: web::Path<String>,
    payload: web::Json<SaveRoleRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let (role, created) = service
        .put_role(&name, payload.into_inner().privileges)
        .await?;

    if created {
        Ok(HttpResponse::Created().json(role))
    } else {
        Ok(HttpResponse::Ok().json(role))
    }
}

/// 역할 삭제 핸들러
#[delete("/{name}")]
pub async fn delete_role(
    service: web::Data<RoleService>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_role(&name).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use super::*;
    use crate::repositories::roles::InMemoryRoleStore;

    fn role_service() -> web::Data<RoleService> {
        web::Data::new(RoleService::new(Arc::new(InMemoryRoleStore::new())))
    }

    fn roles_scope() -> actix_web::Scope {
        web::scope("/api/v1/roles")
            .service(list_roles)
            .service(get_role)
            .service(put_role)
            .service(delete_role)
    }

    #[actix_web::test]
    async fn test_put_creates_then_updates() {
        let app = test::init_service(
            App::new().app_data(role_service()).service(roles_scope())
        ).await;

        let request = test::TestRequest::put()
            .uri("/api/v1/roles/editor")
            .set_json(json!({ "privileges": ["write", "read"] }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "name": "editor", "privileges": ["read", "write"] }));

        let request = test::TestRequest::put()
            .uri("/api/v1/roles/editor")
            .set_json(json!({ "privileges": ["read"] }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_get_and_list_hide_ids() {
        let app = test::init_service(
            App::new().app_data(role_service()).service(roles_scope())
        ).await;

        let request = test::TestRequest::put()
            .uri("/api/v1/roles/viewer")
            .set_json(json!({ "privileges": ["read"] }))
            .to_request();
        test::call_service(&app, request).await;

        let request = test::TestRequest::get().uri("/api/v1/roles/viewer").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert!(body.get("_id").is_none());
        assert!(body.get("id").is_none());
        assert_eq!(body["privileges"], json!(["read"]));

        let request = test::TestRequest::get().uri("/api/v1/roles").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn test_missing_role_is_404() {
        let app = test::init_service(
            App::new().app_data(role_service()).service(roles_scope())
        ).await;

        let request = test::TestRequest::get().uri("/api/v1/roles/ghost").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let request = test::TestRequest::delete().uri("/api/v1/roles/ghost").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_role() {
        let app = test::init_service(
            App::new().app_data(role_service()).service(roles_scope())
        ).await;

        let request = test::TestRequest::put()
            .uri("/api/v1/roles/temp")
            .set_json(json!({ "privileges": [] }))
            .to_request();
        test::call_service(&app, request).await;

        let request = test::TestRequest::delete().uri("/api/v1/roles/temp").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_blank_privilege_is_rejected() {
        let app = test::init_service(
            App::new().app_data(role_service()).service(roles_scope())
        ).await;

        let request = test::TestRequest::put()
            .uri("/api/v1/roles/editor")
            .set_json(json!({ "privileges": ["read", "  "] }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(response).await;
        assert!(body["error"].as_str().is_some());
    }
}
