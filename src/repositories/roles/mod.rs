//! 역할 데이터 액세스 계층
//!
//! - [`role_store`] - 저장소 계약 (`find_by_id`, `find_all`, `save`, `delete_by_id` 등)
//! - [`role_repo`] - MongoDB `roles` 컬렉션 구현
//! - [`memory_store`] - 프로세스 내 메모리 구현

pub mod role_store;
pub mod role_repo;
pub mod memory_store;

pub use role_store::RoleStore;
pub use role_repo::RoleRepository;
pub use memory_store::InMemoryRoleStore;

#[cfg(test)]
pub use role_store::MockRoleStore;
