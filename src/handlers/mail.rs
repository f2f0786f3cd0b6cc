//! # Transactional Mail HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/mail/send` | 템플릿 메일 발송 | 202 Accepted |
//!
//! 게이트웨이가 발송을 거부하면 502와 함께 게이트웨이 메시지가 반환됩니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::dto::mail::SendMailRequest,
    errors::errors::AppError,
    services::email::EmailService,
};

/// 메일 발송 핸들러
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/mail/send \
///   -H "Content-Type: application/json" \
///   -d '{
///     "to_name": "Jane Doe",
///     "to_email": "jane@example.com",
///     "template": "user_welcome",
///     "lang": "sv",
///     "args": { "name": "Jane" }
///   }'
/// ```
#[post("/send")]
pub async fn send_mail(
    service: web::Data<EmailService>,
    payload: web::Json<SendMailRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    let receipt = service
        .send(
            &request.to_name,
            &request.to_email,
            &request.template,
            request.lang.as_deref(),
            &request.args,
        )
        .await?;

    Ok(HttpResponse::Accepted().json(receipt))
}
