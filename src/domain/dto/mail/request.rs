//! 메일 발송 요청 DTO
//!
//! 한 번의 발송 호출 동안만 존재하는 요청 데이터입니다. 저장되지 않습니다.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 템플릿 메일 발송 요청
///
/// ```json
/// {
///   "to_name": "Jane Doe",
///   "to_email": "jane@example.com",
///   "template": "user_welcome",
///   "lang": "sv",
///   "args": { "name": "Jane", "link": "https://example.com/confirm/abc" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMailRequest {
    /// 수신자 표시 이름
    #[validate(length(min = 1, message = "수신자 이름은 필수입니다"))]
    pub to_name: String,

    /// 수신자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub to_email: String,

    /// 템플릿 식별자 (예: `user_welcome`)
    #[validate(length(min = 1, message = "템플릿 식별자는 필수입니다"))]
    pub template: String,

    /// 언어 코드 (생략 또는 빈 문자열이면 기본 언어)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub lang: Option<String>,

    /// 치환 인자
    #[serde(default)]
    pub args: BTreeMap<String, String>,
}
