//! 역할 저장 요청 DTO
//!
//! `PUT /api/v1/roles/{name}` 요청 본문입니다. 역할 이름은 경로에서 받습니다.

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 역할 생성/수정 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveRoleRequest {
    /// 부여할 권한 목록 (중복은 자동 제거)
    #[serde(default)]
    #[validate(custom(function = "validate_privileges"))]
    pub privileges: BTreeSet<String>,
}

/// 빈 문자열이나 공백뿐인 권한은 허용하지 않음
fn validate_privileges(privileges: &BTreeSet<String>) -> Result<(), ValidationError> {
    if privileges.iter().any(|p| p.trim().is_empty()) {
        return Err(ValidationError::new("blank_privilege")
            .with_message("권한은 빈 문자열일 수 없습니다".into()));
    }
    Ok(())
}
