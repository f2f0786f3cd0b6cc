//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 모든 값은 시작 시점에 읽혀진 뒤 불변으로 취급됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 프로필 `.env` 로딩, 데이터베이스, 역할 저장소, 서버, 환경, Rate Limiting 설정
//! - [`mail_config`] - Mailgun, 발신자, 템플릿/번역 리소스 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="users"
//!
//! # 역할 저장소 (mongo | memory, 기본값 mongo)
//! export ROLE_STORE="memory"
//!
//! # Mailgun
//! export MAILGUN_API_KEY="key-xxxxxxxx"
//! export MAILGUN_DOMAIN="mg.example.com"
//! export MAIL_SITE_NAME="Example"
//! export MAIL_SENDER="noreply@example.com"
//! ```

pub mod data_config;
pub mod mail_config;

pub use data_config::*;
pub use mail_config::*;
