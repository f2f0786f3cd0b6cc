//! 역할 저장소 계약
//!
//! 역할 레코드에 대한 CRUD 연산을 정의합니다. 저장과 인덱싱은
//! 구현체가 사용하는 문서 데이터베이스에 위임됩니다.

use std::collections::BTreeSet;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::roles::Role;
use crate::errors::errors::AppError;

/// 역할 저장소
///
/// ## 에러
///
/// - `AppError::ValidationError` - ObjectId 형식이 아닌 ID
/// - `AppError::ConflictError` - 다른 ID의 역할이 같은 이름을 이미 사용 중
/// - `AppError::DatabaseError` - 저장소가 보고한 오류 (복구 시도 없이 그대로 전달)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// ID로 역할 조회
    async fn find_by_id(&self, id: &str) -> Result<Option<Role>, AppError>;

    /// 이름으로 역할 조회
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError>;

    /// 모든 역할 조회
    async fn find_all(&self) -> Result<Vec<Role>, AppError>;

    /// 역할 저장
    ///
    /// `id`가 없으면 새로 삽입하고 할당된 ID를 채워 반환합니다.
    /// `id`가 있으면 해당 문서를 교체합니다 (없으면 삽입).
    /// 역할 이름은 저장소 안에서 유일해야 합니다.
    async fn save(&self, role: Role) -> Result<Role, AppError>;

    /// 이름 기준 원자적 생성 또는 권한 교체
    ///
    /// 같은 이름에 대한 동시 호출이 있어도 역할은 하나만 만들어집니다.
    /// 기존 역할이 있으면 권한 집합만 교체되고 ID는 유지됩니다.
    ///
    /// * `(Role, true)` - 새로 생성됨
    /// * `(Role, false)` - 기존 역할이 갱신됨
    async fn upsert_by_name(
        &self,
        name: &str,
        privileges: BTreeSet<String>,
    ) -> Result<(Role, bool), AppError>;

    /// ID로 역할 삭제
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 역할이 없음
    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError>;
}

/// 문자열 ID를 ObjectId로 변환합니다.
pub(crate) fn parse_role_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_id() {
        let id = ObjectId::new();
        assert_eq!(parse_role_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(parse_role_id("not-an-id"), Err(AppError::ValidationError(_))));
    }
}
