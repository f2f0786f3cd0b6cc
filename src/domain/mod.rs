//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB 문서와 매핑되는 영속 객체 (Role)
//! ├── DTOs      - HTTP 요청/응답 계약 (역할, 메일 발송 요청)
//! └── Models    - 외부 시스템 통합 모델 (Mailgun 페이로드/응답)
//! ```
//!
//! 엔티티는 저장소 주소 지정용 식별자를 포함하지만,
//! 외부로 노출되는 DTO에는 식별자가 포함되지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
