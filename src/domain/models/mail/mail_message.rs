use serde::Serialize;

/// 메일 게이트웨이로 전송되는 폼 페이로드
///
/// 필드 이름이 그대로 `application/x-www-form-urlencoded` 키가 됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub subject: String,
    /// `<site-name> <<sender>>`
    pub from: String,
    /// `<name> <<address>>`
    pub to: String,
    /// 렌더링된 HTML 본문
    pub html: String,
}

impl MailMessage {
    /// 수신자 표시 형식 `<name> <<address>>`
    pub fn recipient(name: &str, address: &str) -> String {
        format!("{} <{}>", name, address)
    }
}
