//! 텍스트/로컬라이제이션 협력자 계약
//!
//! 메일 서비스가 제목과 본문을 현지화할 때 사용하는 인터페이스입니다.

use std::collections::BTreeMap;

/// 자리표시자 치환 인자 (`${name}` → 값)
pub type TextArgs = BTreeMap<String, String>;

/// 언어별 문자열 조회와 자리표시자 치환을 제공하는 서비스
#[cfg_attr(test, mockall::automock)]
pub trait TextService: Send + Sync {
    /// 지원하는 언어인지 확인
    fn has(&self, language: &str) -> bool;

    /// 키에 해당하는 현지화 문자열을 인자 치환 후 반환
    fn get(&self, key: &str, language: &str, args: &TextArgs) -> String;

    /// 한 줄의 텍스트에 포함된 키 참조와 인자 자리표시자를 치환
    fn format(&self, line: &str, language: &str, args: &TextArgs) -> String;
}
