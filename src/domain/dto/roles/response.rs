use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::domain::entities::roles::Role;

/// 역할 응답 DTO
///
/// 외부로 노출되는 역할 표현입니다. 저장소 식별자는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleResponse {
    pub name: String,
    pub privileges: BTreeSet<String>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        let Role { name, privileges, .. } = role;
        Self { name, privileges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_omits_identifier() {
        let mut role = Role::new("admin", ["read", "write"]);
        role.id = Some(ObjectId::new());

        let json = serde_json::to_value(RoleResponse::from(role)).unwrap();

        assert!(json.get("id").is_none());
        assert!(json.get("_id").is_none());
        assert_eq!(json["name"], "admin");
        assert_eq!(json["privileges"], serde_json::json!(["read", "write"]));
    }
}
