//! 텍스트/로컬라이제이션 서비스 모듈
//!
//! - [`text_service`] - 협력자 계약 (`has`, `get`, `format`)
//! - [`bundle_text_service`] - JSON 번역 번들 기반 구현

pub mod text_service;
pub mod bundle_text_service;

pub use text_service::{TextArgs, TextService};
pub use bundle_text_service::BundleTextService;

#[cfg(test)]
pub use text_service::MockTextService;
