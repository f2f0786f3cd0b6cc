//! 역할 관련 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::SaveRoleRequest;
pub use response::RoleResponse;
