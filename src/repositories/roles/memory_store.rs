//! 메모리 기반 역할 저장소
//!
//! MongoDB 없이 동작해야 하는 테스트와 로컬 실행을 위한 [`RoleStore`] 구현입니다.
//! MongoDB 구현과 동일하게 저장 시 `ObjectId`를 할당하고, 이름 유일성을 강제합니다.

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::roles::Role;
use crate::errors::errors::AppError;
use super::role_store::{parse_role_id, RoleStore};

#[derive(Default)]
pub struct InMemoryRoleStore {
    roles: RwLock<HashMap<ObjectId, Role>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E>(_: E) -> AppError {
    AppError::InternalError("role store lock poisoned".to_string())
}

fn name_conflict(name: &str) -> AppError {
    AppError::ConflictError(format!("이미 사용 중인 역할 이름입니다: {}", name))
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Role>, AppError> {
        let object_id = parse_role_id(id)?;
        let roles = self.roles.read().map_err(poisoned)?;
        Ok(roles.get(&object_id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
        let roles = self.roles.read().map_err(poisoned)?;
        Ok(roles.values().find(|role| role.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Role>, AppError> {
        let roles = self.roles.read().map_err(poisoned)?;
        let mut all: Vec<Role> = roles.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn save(&self, mut role: Role) -> Result<Role, AppError> {
        let id = *role.id.get_or_insert_with(ObjectId::new);
        let mut roles = self.roles.write().map_err(poisoned)?;

        if roles.iter().any(|(other, existing)| *other != id && existing.name == role.name) {
            return Err(name_conflict(&role.name));
        }

        roles.insert(id, role.clone());
        Ok(role)
    }

    async fn upsert_by_name(
        &self,
        name: &str,
        privileges: BTreeSet<String>,
    ) -> Result<(Role, bool), AppError> {
        let mut roles = self.roles.write().map_err(poisoned)?;

        if let Some(existing) = roles.values_mut().find(|role| role.name == name) {
            existing.privileges = privileges;
            return Ok((existing.clone(), false));
        }

        let id = ObjectId::new();
        let mut role = Role::new(name, privileges);
        role.id = Some(id);
        roles.insert(id, role.clone());
        Ok((role, true))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_role_id(id)?;
        let mut roles = self.roles.write().map_err(poisoned)?;
        Ok(roles.remove(&object_id).is_some())
    }
}
