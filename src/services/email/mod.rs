//! 트랜잭션 메일 서비스 모듈
//!
//! - [`mail_gateway`] - 메일 게이트웨이 계약과 Mailgun 구현
//! - [`email_service`] - 템플릿 렌더링 후 게이트웨이로 발송

pub mod mail_gateway;
pub mod email_service;

pub use mail_gateway::{MailGateway, MailgunGateway};
pub use email_service::EmailService;

#[cfg(test)]
pub use mail_gateway::MockMailGateway;
