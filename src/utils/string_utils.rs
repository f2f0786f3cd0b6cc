//! # 문자열 유틸리티
//!
//! 요청 값 정리에 쓰이는 공통 함수들입니다.

use serde::Deserialize;
use crate::errors::errors::AppError;

/// 필수 문자열 검증 및 정리
///
/// 앞뒤 공백을 제거한 값을 반환하며, 비어 있으면 `ValidationError`를 반환합니다.
///
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  editor ", "역할 이름")?, "editor");
/// assert!(validate_required_string("   ", "역할 이름").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 정리
///
/// 빈 문자열이나 공백뿐인 값은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 메일 요청의 `lang`처럼 "없음"과 "빈 값"을 같게 취급해야 하는 필드에 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Request {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     lang: Option<String>,
/// }
///
/// // {"lang": " sv "} → Some("sv")
/// // {"lang": ""}     → None
/// // {"lang": null}   → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
