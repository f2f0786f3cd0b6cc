//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 대응되는 문서 구조를 정의합니다.
//!
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑, 저장 시 자동 할당

pub mod roles;

pub use roles::*;
