//! # 역할 리포지토리 구현
//!
//! MongoDB `roles` 컬렉션을 저장소로 사용하는 [`RoleStore`] 구현입니다.
//!
//! ## 문서 구조
//!
//! ```json
//! { "_id": ObjectId("..."), "name": "editor", "privileges": ["read", "write"] }
//! ```

use std::collections::BTreeSet;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReplaceOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::roles::Role,
    errors::errors::AppError,
};
use super::role_store::{parse_role_id, RoleStore};

/// 역할 컬렉션 이름
pub const ROLES_COLLECTION: &str = "roles";

/// MongoDB 중복 키 에러 코드 (E11000)
const DUPLICATE_KEY: i32 = 11000;

/// MongoDB 기반 역할 리포지토리
///
/// 이름 중복(E11000)은 `AppError::ConflictError`로, 그 외 에러는
/// `AppError::DatabaseError`로 감싸서 전달합니다. 캐싱은 하지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = RoleRepository::new(database);
/// repo.create_indexes().await?;
///
/// let saved = repo.save(Role::new("editor", ["read", "write"])).await?;
/// let found = repo.find_by_id(&saved.id_string().unwrap()).await?;
/// ```
#[derive(Clone)]
pub struct RoleRepository {
    db: Database,
}

impl RoleRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Role> {
        self.db.get_database().collection::<Role>(ROLES_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 역할 이름 유니크 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// `name`으로 찾은 문서의 권한을 교체하고, 없으면 삽입합니다.
    ///
    /// 교체 전 문서를 반환하므로 `None`이면 새로 삽입된 것입니다.
    async fn set_privileges(
        &self,
        name: &str,
        privileges: &[&str],
    ) -> Result<Option<Role>, MongoError> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "name": name },
                doc! { "$set": { "privileges": privileges.to_vec() } },
            )
            .with_options(options)
            .await
    }
}

/// 유니크 인덱스 위반 여부
fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Command(command) => command.code == DUPLICATE_KEY,
        ErrorKind::Write(WriteFailure::WriteError(write)) => write.code == DUPLICATE_KEY,
        _ => false,
    }
}

fn save_error(error: MongoError, name: &str) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError(format!("이미 사용 중인 역할 이름입니다: {}", name))
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

#[async_trait]
impl RoleStore for RoleRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Role>, AppError> {
        let object_id = parse_role_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError> {
        self.collection()
            .find_one(doc! { "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Role>, AppError> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn save(&self, mut role: Role) -> Result<Role, AppError> {
        match role.id {
            None => {
                let result = self.collection()
                    .insert_one(&role)
                    .await
                    .map_err(|e| save_error(e, &role.name))?;

                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
                })?;
                role.id = Some(id);
                debug!("역할 생성: {} ({})", role.name, id.to_hex());
            }
            Some(id) => {
                let options = ReplaceOptions::builder().upsert(true).build();

                self.collection()
                    .replace_one(doc! { "_id": id }, &role)
                    .with_options(options)
                    .await
                    .map_err(|e| save_error(e, &role.name))?;
                debug!("역할 저장: {} ({})", role.name, id.to_hex());
            }
        }

        Ok(role)
    }

    async fn upsert_by_name(
        &self,
        name: &str,
        privileges: BTreeSet<String>,
    ) -> Result<(Role, bool), AppError> {
        let values: Vec<&str> = privileges.iter().map(String::as_str).collect();

        // 동시 upsert가 같은 이름을 먼저 삽입하면 E11000이 나므로, 한 번 더 시도하면 갱신이 됩니다.
        let previous = match self.set_privileges(name, &values).await {
            Err(e) if is_duplicate_key(&e) => {
                warn!("역할 '{}' 동시 생성 감지, 갱신으로 재시도", name);
                self.set_privileges(name, &values).await
            }
            result => result,
        }
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match previous {
            Some(mut role) => {
                role.privileges = privileges;
                Ok((role, false))
            }
            None => {
                let role = self.find_by_name(name).await?.ok_or_else(|| {
                    AppError::DatabaseError(format!("upsert된 역할을 다시 읽을 수 없습니다: {}", name))
                })?;
                debug!("역할 생성: {}", name);
                Ok((role, true))
            }
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_role_id(id)?;

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
