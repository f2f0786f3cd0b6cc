//! Mailgun 통합 모델
//!
//! - [`MailMessage`] - `POST /v3/<domain>/messages` 폼 페이로드
//! - [`DeliveryReceipt`] - 게이트웨이 JSON 응답

pub mod mail_message;
pub mod delivery_receipt;

pub use mail_message::MailMessage;
pub use delivery_receipt::DeliveryReceipt;
