//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 계약은 [`RoleStore`](roles::RoleStore) trait으로 정의되고,
//! MongoDB 구현([`RoleRepository`](roles::RoleRepository))과
//! 메모리 구현([`InMemoryRoleStore`](roles::InMemoryRoleStore))이 이를 구현합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::roles::{RoleRepository, RoleStore};
//!
//! let store: Arc<dyn RoleStore> = Arc::new(RoleRepository::new(database));
//! let role = store.find_by_name("admin").await?;
//! ```

pub mod roles;
