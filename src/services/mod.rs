//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - [`roles`] - 역할 조회/저장/삭제
//! - [`text`] - 언어별 문자열 조회 및 자리표시자 치환
//! - [`email`] - 템플릿 렌더링과 Mailgun 발송
//!
//! 서비스는 시작 시 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::email::EmailService;
//!
//! let receipt = email_service
//!     .send("Jane", "jane@example.com", "user_welcome", None, &args)
//!     .await?;
//! ```

pub mod roles;
pub mod text;
pub mod email;
