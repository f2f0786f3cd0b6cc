//! 사용자 서비스 백엔드
//!
//! 역할(Role) 영속화와 현지화된 트랜잭션 메일 발송을 제공하는 서비스입니다.
//!
//! # Features
//!
//! - **역할 관리**: 이름 기반 역할 조회/생성/권한 교체/삭제, MongoDB 영속화
//! - **트랜잭션 메일**: HTML 템플릿 현지화 후 Mailgun HTTP API로 발송
//! - **텍스트 번들**: 언어별 JSON 번들 기반 문자열 조회와 자리표시자 치환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← RoleService, EmailService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┬──────────────────┬───────────────┐
//! │  RoleStore      │  MailGateway     │  TextService  │
//! │  (MongoDB)      │  (Mailgun)       │  (JSON 번들)   │
//! └─────────────────┴──────────────────┴───────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use users_service_backend::repositories::roles::InMemoryRoleStore;
//! use users_service_backend::services::roles::RoleService;
//!
//! let roles = RoleService::new(Arc::new(InMemoryRoleStore::new()));
//! let (role, created) = roles.put_role("editor", privileges).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
