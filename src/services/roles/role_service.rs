//! # 역할 관리 서비스
//!
//! HTTP 계층이 역할을 이름으로 다룰 수 있도록 [`RoleStore`] 위에
//! 얇은 비즈니스 규칙을 얹은 서비스입니다. 저장소 식별자는 이 계층 밖으로
//! 노출되지 않으며, 응답은 항상 [`RoleResponse`]로 변환됩니다.

use std::collections::BTreeSet;
use std::sync::Arc;
use log::info;
use crate::{
    domain::{
        dto::roles::RoleResponse,
        entities::roles::Role,
    },
    errors::errors::AppError,
    repositories::roles::RoleStore,
    utils::string_utils::validate_required_string,
};

/// 역할 관리 비즈니스 로직 서비스
///
/// ## 주요 책임
///
/// 1. 역할 목록/단건 조회 (식별자 제외한 공개 표현으로 변환)
/// 2. 이름 기준 생성 또는 권한 교체 (기존 ID 유지)
/// 3. 이름 기준 삭제
pub struct RoleService {
    store: Arc<dyn RoleStore>,
}

impl RoleService {
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    /// 모든 역할 조회
    pub async fn list_roles(&self) -> Result<Vec<RoleResponse>, AppError> {
        let roles = self.store.find_all().await?;
        Ok(roles.into_iter().map(RoleResponse::from).collect())
    }

    /// 이름으로 역할 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이름의 역할이 없음
    pub async fn get_role(&self, name: &str) -> Result<RoleResponse, AppError> {
        let role = self.find_existing(name).await?;
        Ok(RoleResponse::from(role))
    }

    /// 역할 생성 또는 권한 교체
    ///
    /// 같은 이름의 역할이 있으면 권한 집합만 교체하고 ID는 유지합니다.
    /// 같은 이름에 대한 동시 요청도 역할을 하나만 만듭니다.
    ///
    /// # Returns
    ///
    /// * `(RoleResponse, true)` - 새로 생성됨
    /// * `(RoleResponse, false)` - 기존 역할이 갱신됨
    pub async fn put_role(
        &self,
        name: &str,
        privileges: BTreeSet<String>,
    ) -> Result<(RoleResponse, bool), AppError> {
        let name = validate_required_string(name, "역할 이름")?;
        let privileges: BTreeSet<String> = privileges
            .into_iter()
            .map(|p| p.trim().to_string())
            .collect();

        let (saved, created) = self.store.upsert_by_name(&name, privileges).await?;
        info!(
            "역할 {}: {} ({}개 권한)",
            if created { "생성" } else { "갱신" },
            saved.name,
            saved.privileges.len()
        );

        Ok((RoleResponse::from(saved), created))
    }

    /// 이름으로 역할 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이름의 역할이 없음
    pub async fn delete_role(&self, name: &str) -> Result<(), AppError> {
        let role = self.find_existing(name).await?;
        let id = role
            .id_string()
            .ok_or_else(|| AppError::InternalError(format!("역할 '{}'에 ID가 없습니다", role.name)))?;

        if !self.store.delete_by_id(&id).await? {
            return Err(AppError::NotFound(format!("역할을 찾을 수 없습니다: {}", role.name)));
        }

        info!("역할 삭제: {}", role.name);
        Ok(())
    }

    async fn find_existing(&self, name: &str) -> Result<Role, AppError> {
        let name = validate_required_string(name, "역할 이름")?;
        self.store
            .find_by_name(&name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("역할을 찾을 수 없습니다: {}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use crate::repositories::roles::{InMemoryRoleStore, MockRoleStore};

    fn privileges(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[actix_web::test]
    async fn test_put_role_creates_then_updates() {
        let service = RoleService::new(Arc::new(InMemoryRoleStore::new()));

        let (created, is_new) = service.put_role("editor", privileges(&["read"])).await.unwrap();
        assert!(is_new);
        assert_eq!(created.privileges, privileges(&["read"]));

        let (updated, is_new) = service
            .put_role(" editor ", privileges(&["write", "read"]))
            .await
            .unwrap();
        assert!(!is_new);
        assert_eq!(updated.name, "editor");
        assert_eq!(updated.privileges, privileges(&["read", "write"]));

        assert_eq!(service.list_roles().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_put_role_keeps_existing_id() {
        let id = ObjectId::new();
        let mut store = MockRoleStore::new();
        store
            .expect_upsert_by_name()
            .withf(|name, privileges| name == "admin" && privileges.contains("write"))
            .times(1)
            .returning(move |name, privileges| {
                let mut role = Role::new(name, privileges);
                role.id = Some(id);
                Ok((role, false))
            });

        let service = RoleService::new(Arc::new(store));
        let (role, created) = service.put_role(" admin ", privileges(&["read", " write "])).await.unwrap();
        assert!(!created);
        assert_eq!(role.privileges, privileges(&["read", "write"]));
    }

    /// 저장소 호출마다 실행 순서를 양보해서 요청이 서로 끼어들게 만드는 래퍼
    struct InterleavingStore(InMemoryRoleStore);

    #[async_trait::async_trait]
    impl RoleStore for InterleavingStore {
        async fn find_by_id(&self, id: &str) -> Result<Option<Role>, AppError> {
            actix_web::rt::task::yield_now().await;
            self.0.find_by_id(id).await
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
            actix_web::rt::task::yield_now().await;
            self.0.find_by_name(name).await
        }

        async fn find_all(&self) -> Result<Vec<Role>, AppError> {
            actix_web::rt::task::yield_now().await;
            self.0.find_all().await
        }

        async fn save(&self, role: Role) -> Result<Role, AppError> {
            actix_web::rt::task::yield_now().await;
            self.0.save(role).await
        }

        async fn upsert_by_name(
            &self,
            name: &str,
            privileges: BTreeSet<String>,
        ) -> Result<(Role, bool), AppError> {
            actix_web::rt::task::yield_now().await;
            self.0.upsert_by_name(name, privileges).await
        }

        async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
            actix_web::rt::task::yield_now().await;
            self.0.delete_by_id(id).await
        }
    }

    #[actix_web::test]
    async fn test_concurrent_put_creates_single_role() {
        let service = RoleService::new(Arc::new(InterleavingStore(InMemoryRoleStore::new())));

        let (first, second) = futures_util::join!(
            service.put_role("editor", privileges(&["read"])),
            service.put_role("editor", privileges(&["write"])),
        );
        let (_, first_created) = first.unwrap();
        let (_, second_created) = second.unwrap();
        assert!(first_created != second_created, "exactly one request creates the role");

        let roles = service.list_roles().await.unwrap();
        assert_eq!(roles.len(), 1);

        service.delete_role("editor").await.unwrap();
        assert!(matches!(service.get_role("editor").await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_get_missing_role_is_not_found() {
        let service = RoleService::new(Arc::new(InMemoryRoleStore::new()));
        let result = service.get_role("ghost").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_blank_name_is_validation_error() {
        let service = RoleService::new(Arc::new(InMemoryRoleStore::new()));
        let result = service.put_role("   ", privileges(&["read"])).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_delete_role() {
        let service = RoleService::new(Arc::new(InMemoryRoleStore::new()));
        service.put_role("viewer", privileges(&["read"])).await.unwrap();

        service.delete_role("viewer").await.unwrap();

        assert!(matches!(service.delete_role("viewer").await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_store_errors_propagate_unchanged() {
        let mut store = MockRoleStore::new();
        store
            .expect_find_all()
            .returning(|| Err(AppError::DatabaseError("connection refused".to_string())));

        let service = RoleService::new(Arc::new(store));
        match service.list_roles().await {
            Err(AppError::DatabaseError(message)) => assert_eq!(message, "connection refused"),
            other => panic!("expected DatabaseError, got {:?}", other),
        }
    }
}
