//! Roles Entity Module
//!
//! 사용자에게 부여되는 권한 묶음인 [`Role`](role::Role) 엔티티를 정의합니다.

pub mod role;

pub use role::Role;
