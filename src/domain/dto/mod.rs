//! # Data Transfer Objects
//!
//! HTTP 계층에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator`로 검증되며, 응답 DTO는 내부 식별자를 노출하지 않습니다.

pub mod roles;
pub mod mail;

pub use roles::*;
pub use mail::*;
