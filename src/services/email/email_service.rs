//! # 트랜잭션 메일 서비스
//!
//! HTML 템플릿을 현지화/치환한 뒤 [`MailGateway`]를 통해 한 번 발송합니다.
//!
//! ## 발송 흐름
//!
//! ```text
//! send(to_name, to_email, template, lang, args)
//!   ├─ 1. 언어 결정 (None → "en", 미지원 언어 → ValidationError)
//!   ├─ 2. 제목: "user_welcome" → "user.welcome.subject" 키 조회
//!   ├─ 3. 템플릿 파일 <mail-dir>/<template>.html 로드 (없으면 ValidationError)
//!   ├─ 4. 각 줄을 TextService::format 으로 변환 후 "\n"으로 연결
//!   ├─ 5. from / to 헤더 구성
//!   └─ 6. 게이트웨이 발송 (정확히 1회, 1~4단계 실패 시 호출 없음)
//! ```

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use actix_web::web;
use log::{debug, info};
use crate::{
    config::{SenderConfig, DEFAULT_LANGUAGE},
    domain::models::mail::{DeliveryReceipt, MailMessage},
    errors::errors::AppError,
    services::text::{TextArgs, TextService},
};
use super::mail_gateway::MailGateway;

const TEMPLATE_EXTENSION: &str = "html";
const SUBJECT_SUFFIX: &str = ".subject";

/// 템플릿 기반 메일 발송 서비스
///
/// 생성 이후 불변이며 여러 워커에서 동시에 호출할 수 있습니다.
pub struct EmailService {
    text: Arc<dyn TextService>,
    gateway: Arc<dyn MailGateway>,
    sender: SenderConfig,
    mail_dir: PathBuf,
}

impl EmailService {
    pub fn new(
        text: Arc<dyn TextService>,
        gateway: Arc<dyn MailGateway>,
        sender: SenderConfig,
        mail_dir: PathBuf,
    ) -> Self {
        Self { text, gateway, sender, mail_dir }
    }

    /// 템플릿 메일 발송
    ///
    /// # Arguments
    ///
    /// * `to_name` - 수신자 표시 이름
    /// * `to_email` - 수신자 주소
    /// * `template` - 템플릿 ID (`[A-Za-z0-9_-]+`)
    /// * `lang` - 언어 코드, `None`이면 `en`
    /// * `args` - `${name}` 치환 인자
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 미지원 언어 또는 템플릿 없음 (게이트웨이 호출 없음)
    /// * `AppError::DeliveryError` - 게이트웨이가 발송을 거부함
    /// * `AppError::ExternalServiceError` - 게이트웨이 연결 실패
    pub async fn send(
        &self,
        to_name: &str,
        to_email: &str,
        template: &str,
        lang: Option<&str>,
        args: &TextArgs,
    ) -> Result<DeliveryReceipt, AppError> {
        let language = self.resolve_language(lang)?;
        let subject = self.text.get(&subject_key(template), language, args);
        let html = self.render_body(template, language, args).await?;

        let message = MailMessage {
            subject,
            from: self.sender.from_header(),
            to: MailMessage::recipient(to_name, to_email),
            html,
        };

        debug!("메일 발송 요청: template={}, lang={}, to={}", template, language, message.to);
        let receipt = self.gateway.deliver(&message).await?;
        info!("📧 메일 발송 완료: template={}, id={:?}", template, receipt.id);

        Ok(receipt)
    }

    fn resolve_language<'a>(&self, lang: Option<&'a str>) -> Result<&'a str, AppError> {
        match lang {
            None => Ok(DEFAULT_LANGUAGE),
            Some(language) if self.text.has(language) => Ok(language),
            Some(language) => Err(AppError::ValidationError(format!(
                "'{}' is not a valid language.",
                language
            ))),
        }
    }

    async fn render_body(
        &self,
        template: &str,
        language: &str,
        args: &TextArgs,
    ) -> Result<String, AppError> {
        let source = self.load_template(template).await?;

        Ok(source
            .lines()
            .map(|line| self.text.format(line, language, args))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    async fn load_template(&self, template: &str) -> Result<String, AppError> {
        let file_name = format!("{}.{}", template, TEMPLATE_EXTENSION);
        let not_found = || {
            AppError::ValidationError(format!("Could not find email template '{}'.", file_name))
        };

        if !is_valid_template_id(template) {
            return Err(not_found());
        }

        let path = self.mail_dir.join(&file_name);
        match web::block(move || fs::read_to_string(path)).await {
            Ok(Ok(source)) => Ok(source),
            Ok(Err(e)) => {
                debug!("템플릿 읽기 실패 {}: {}", file_name, e);
                Err(not_found())
            }
            Err(e) => Err(AppError::InternalError(format!("템플릿 로딩 작업 실패: {}", e))),
        }
    }
}

/// `user_welcome` → `user.welcome.subject`
fn subject_key(template: &str) -> String {
    format!("{}{}", template.replace('_', "."), SUBJECT_SUFFIX)
}

fn is_valid_template_id(template: &str) -> bool {
    !template.is_empty()
        && template
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
