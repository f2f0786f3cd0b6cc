//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문을 검증한 뒤 `web::Data`로 주입된 서비스에 위임하고,
//! 서비스가 반환한 [`AppError`](crate::errors::AppError)는 그대로 HTTP 응답으로 변환됩니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - RoleService, EmailService          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   RoleStore / MailGateway / TextService         ← Ports
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`roles`] - 역할 조회/저장/삭제
//! - [`mail`] - 템플릿 메일 발송

pub mod roles;
pub mod mail;
