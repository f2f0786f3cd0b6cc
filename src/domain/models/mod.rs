//! # External Models
//!
//! 외부 시스템(Mailgun)과 주고받는 데이터 모델입니다.

pub mod mail;

pub use mail::*;
