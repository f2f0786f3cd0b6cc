//! 메일 발송 관련 설정 모듈
//!
//! Mailgun API 자격 증명, 발신자 정보, 템플릿/번역 리소스 경로를 관리합니다.
//! 모든 값은 애플리케이션 시작 시 한 번 읽혀지며 이후에는 변경되지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export MAILGUN_API_KEY="key-xxxxxxxx"
//! export MAILGUN_DOMAIN="mg.example.com"
//! export MAIL_SITE_NAME="Example"
//! export MAIL_SENDER="noreply@example.com"
//!
//! # 선택
//! export MAILGUN_API_BASE="https://api.eu.mailgun.net"   # 기본값: https://api.mailgun.net
//! export MAIL_TEMPLATE_DIR="resources/mail"              # 기본값
//! export TEXT_BUNDLE_DIR="resources/text"                # 기본값
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use crate::errors::errors::AppError;

/// 언어 코드가 지정되지 않았을 때 사용하는 기본 언어
pub const DEFAULT_LANGUAGE: &str = "en";

/// Mailgun 기본 API 주소
pub const DEFAULT_MAILGUN_API_BASE: &str = "https://api.mailgun.net";

/// Basic 인증에 사용되는 고정 사용자명
pub const MAILGUN_API_USER: &str = "api";

fn required(name: &str) -> Result<String, AppError> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::InternalError(format!("{} must be set", name)))
}

/// Mailgun API 설정
#[derive(Clone)]
pub struct MailgunConfig {
    /// API 비밀 키 (로그에 출력 금지)
    pub api_key: String,
    /// 발송 도메인
    pub domain: String,
    /// API 주소 (스킴 포함, 끝의 `/` 없이)
    pub api_base: String,
}

impl MailgunConfig {
    /// 환경 변수에서 Mailgun 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `MAILGUN_API_KEY` 또는 `MAILGUN_DOMAIN` 누락
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            api_key: required("MAILGUN_API_KEY")?,
            domain: required("MAILGUN_DOMAIN")?,
            api_base: env::var("MAILGUN_API_BASE")
                .unwrap_or_else(|_| DEFAULT_MAILGUN_API_BASE.to_string()),
        })
    }

    /// 메시지 발송 엔드포인트 `<api-base>/v3/<domain>/messages`
    pub fn messages_url(&self) -> String {
        format!(
            "{}/v3/{}/messages",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(&self.domain)
        )
    }
}

impl fmt::Debug for MailgunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailgunConfig")
            .field("api_key", &"***")
            .field("domain", &self.domain)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// 발신자 정보
#[derive(Debug, Clone)]
pub struct SenderConfig {
    /// 발신자 표시 이름
    pub site_name: String,
    /// 발신자 주소
    pub sender: String,
}

impl SenderConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            site_name: required("MAIL_SITE_NAME")?,
            sender: required("MAIL_SENDER")?,
        })
    }

    /// `from` 필드 값: `<site-name> <<sender>>`
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.site_name, self.sender)
    }
}

/// 템플릿 및 번역 리소스 경로
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    pub mail_dir: PathBuf,
    pub text_dir: PathBuf,
}

impl TemplateConfig {
    pub fn from_env() -> Self {
        Self {
            mail_dir: env::var("MAIL_TEMPLATE_DIR")
                .unwrap_or_else(|_| "resources/mail".to_string())
                .into(),
            text_dir: env::var("TEXT_BUNDLE_DIR")
                .unwrap_or_else(|_| "resources/text".to_string())
                .into(),
        }
    }
}
