//! Role Entity Implementation
//!
//! `roles` 컬렉션에 저장되는 역할 엔티티입니다.

use std::collections::BTreeSet;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 역할 엔티티
///
/// 사용자에게 부여되는 이름 있는 권한 묶음입니다.
/// 권한은 집합으로 관리되므로 중복이 허용되지 않고 입력 순서는 의미가 없습니다.
///
/// `id`는 저장소 주소 지정에만 사용되며 외부 응답에는
/// [`RoleResponse`](crate::domain::dto::roles::RoleResponse)를 통해 제외됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 역할 이름
    pub name: String,
    /// 권한 문자열 집합
    #[serde(default)]
    pub privileges: BTreeSet<String>,
}

impl Role {
    /// 아직 저장되지 않은 새 역할 생성 (ID는 저장 시 할당됨)
    pub fn new<I, S>(name: impl Into<String>, privileges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            name: name.into(),
            privileges: privileges.into_iter().map(Into::into).collect(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 권한을 포함하는지 확인
    pub fn grants(&self, privilege: &str) -> bool {
        self.privileges.contains(privilege)
    }
}
