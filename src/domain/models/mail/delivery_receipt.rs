use serde::{Deserialize, Serialize};

/// Mailgun 응답 본문
///
/// 성공 시 `{"id": "<...@mg.example.com>", "message": "Queued. Thank you."}`,
/// 실패 시 `{"message": "..."}` 형태입니다. 두 필드 모두 없을 수 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DeliveryReceipt {
    /// 응답 본문을 파싱합니다. 비어 있거나 JSON이 아니면 빈 영수증을 반환합니다.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
