//! # 메일 게이트웨이
//!
//! 렌더링이 끝난 [`MailMessage`]를 외부 발송 서비스로 전달하는 경계입니다.
//! 운영 구현은 Mailgun HTTP API를 호출하는 [`MailgunGateway`]입니다.
//!
//! ## 요청 형식
//!
//! ```text
//! POST <api-base>/v3/<domain>/messages
//! Authorization: Basic base64("api:<api-key>")
//! Content-Type: application/x-www-form-urlencoded
//!
//! subject=...&from=...&to=...&html=...
//! ```
//!
//! ## 응답 처리
//!
//! | 응답 | 결과 |
//! |------|------|
//! | 2xx | `Ok(DeliveryReceipt)` (본문 파싱 실패 시 빈 영수증) |
//! | 2xx 이외 + `{"message": "..."}` | `AppError::DeliveryError(message)` |
//! | 2xx 이외 + 본문 없음/해석 불가 | `AppError::DeliveryError("... status ...")` |
//! | 연결 실패/타임아웃 | `AppError::ExternalServiceError` |

use std::fmt::Display;
use std::time::Duration;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, StatusCode,
};
use crate::{
    config::{MailgunConfig, MAILGUN_API_USER},
    domain::models::mail::{DeliveryReceipt, MailMessage},
    errors::errors::AppError,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 메일 발송 게이트웨이 계약
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailGateway: Send + Sync {
    /// 메시지를 한 번 전달합니다. 재시도하지 않습니다.
    async fn deliver(&self, message: &MailMessage) -> Result<DeliveryReceipt, AppError>;
}

/// Mailgun HTTP API 게이트웨이
///
/// HTTP 클라이언트와 인증 헤더는 생성 시 한 번만 구성되고
/// 이후 모든 발송 요청에서 재사용됩니다.
pub struct MailgunGateway {
    client: Client,
    messages_url: String,
}

impl MailgunGateway {
    /// # Errors
    ///
    /// * `AppError::InternalError` - 인증 헤더 또는 HTTP 클라이언트 구성 실패
    pub fn new(config: MailgunConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(auth_headers(&config.api_key)?)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        let messages_url = config.messages_url();
        debug!("Mailgun 게이트웨이 구성: {}", messages_url);

        Ok(Self { client, messages_url })
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }
}

#[async_trait]
impl MailGateway for MailgunGateway {
    async fn deliver(&self, message: &MailMessage) -> Result<DeliveryReceipt, AppError> {
        let response = self.client
            .post(&self.messages_url)
            .form(message)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("메일 게이트웨이 요청 실패: {}", e)))?;

        let status = response.status();
        let body = response_body(status, response.text().await);

        if !status.is_success() {
            let error = delivery_failure(status, &body);
            warn!("메일 발송 거부 ({}): {}", status, error);
            return Err(error);
        }

        Ok(DeliveryReceipt::parse(&body))
    }
}

fn auth_headers(api_key: &str) -> Result<HeaderMap, AppError> {
    let credentials = STANDARD.encode(format!("{}:{}", MAILGUN_API_USER, api_key));
    let mut value = HeaderValue::from_str(&format!("Basic {}", credentials))
        .map_err(|e| AppError::InternalError(format!("잘못된 Mailgun API 키: {}", e)))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// 응답 본문을 읽지 못하면 경고를 남기고 빈 본문으로 처리합니다.
fn response_body<E: Display>(status: StatusCode, body: Result<String, E>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            warn!("메일 게이트웨이 응답 본문 읽기 실패 ({}): {}", status, e);
            String::new()
        }
    }
}

/// 실패 응답을 `DeliveryError`로 변환합니다.
///
/// 본문이 비어 있거나 `message` 필드가 없으면 상태 코드로 메시지를 만듭니다.
fn delivery_failure(status: StatusCode, body: &str) -> AppError {
    let message = DeliveryReceipt::parse(body)
        .message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("mail gateway responded with status {}", status.as_u16()));

    AppError::DeliveryError(message)
}
