//! # JSON 번들 기반 텍스트 서비스
//!
//! `<text-dir>/<lang>.json` 파일을 언어별 번들로 읽어 [`TextService`]를 구현합니다.
//! 중첩된 JSON 객체는 점으로 연결된 키로 평탄화됩니다.
//!
//! ```json
//! // resources/text/en.json
//! {
//!   "user": {
//!     "welcome": {
//!       "subject": "Welcome to ${site}, ${name}!",
//!       "greeting": "Hello ${name}"
//!     }
//!   }
//! }
//! ```
//!
//! ## 자리표시자 문법
//!
//! | 문법 | 의미 |
//! |------|------|
//! | `#{user.welcome.greeting}` | 번들 키 참조 (`format`에서만) |
//! | `${name}` | 치환 인자 |
//!
//! 알 수 없는 인자 자리표시자는 그대로 남습니다.
//! 요청 언어에 키가 없으면 기본 언어(`en`), 그래도 없으면 키 자체를 사용합니다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use log::{info, warn};
use serde_json::Value;
use crate::config::DEFAULT_LANGUAGE;
use crate::errors::errors::{AppError, ErrorContext};
use super::text_service::{TextArgs, TextService};

const ARG_OPEN: &str = "${";
const KEY_OPEN: &str = "#{";

/// 언어 코드 → (키 → 문자열) 번들
type Bundles = HashMap<String, HashMap<String, String>>;

pub struct BundleTextService {
    bundles: Bundles,
    default_language: String,
}

impl BundleTextService {
    /// JSON 값으로부터 번들을 구성합니다.
    pub fn from_values<I, L>(bundles: I) -> Self
    where
        I: IntoIterator<Item = (L, Value)>,
        L: Into<String>,
    {
        let bundles = bundles
            .into_iter()
            .map(|(language, value)| {
                let mut entries = HashMap::new();
                flatten("", &value, &mut entries);
                (language.into(), entries)
            })
            .collect();

        Self {
            bundles,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// 디렉터리의 `*.json` 파일을 읽어 번들을 구성합니다.
    ///
    /// 파일 이름(확장자 제외)이 언어 코드가 됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 디렉터리/파일 읽기 실패 또는 JSON 파싱 실패
    pub fn load_dir(dir: &Path) -> Result<Self, AppError> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("텍스트 번들 디렉터리를 읽을 수 없습니다: {}", dir.display()))?;

        let mut values = Vec::new();
        for entry in entries {
            let path = entry.context("텍스트 번들 디렉터리 항목 읽기 실패")?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path)
                .with_context(|| format!("텍스트 번들 읽기 실패: {}", path.display()))?;
            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("텍스트 번들 파싱 실패: {}", path.display()))?;

            values.push((language.to_string(), value));
        }

        let service = Self::from_values(values);
        info!("📚 텍스트 번들 로드: {:?}", service.languages());
        Ok(service)
    }

    /// 로드된 언어 코드 목록 (정렬됨)
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    fn lookup<'a>(&'a self, key: &'a str, language: &str) -> &'a str {
        let found = self
            .bundles
            .get(language)
            .and_then(|bundle| bundle.get(key))
            .or_else(|| {
                self.bundles
                    .get(&self.default_language)
                    .and_then(|bundle| bundle.get(key))
            });

        match found {
            Some(text) => text,
            None => {
                warn!("번역 키를 찾을 수 없습니다: {} ({})", key, language);
                key
            }
        }
    }
}

impl TextService for BundleTextService {
    fn has(&self, language: &str) -> bool {
        self.bundles.contains_key(language)
    }

    fn get(&self, key: &str, language: &str, args: &TextArgs) -> String {
        substitute_args(self.lookup(key, language), args)
    }

    fn format(&self, line: &str, language: &str, args: &TextArgs) -> String {
        let localized = replace_placeholders(line, KEY_OPEN, |key| {
            Some(self.lookup(key, language).to_string())
        });
        substitute_args(&localized, args)
    }
}

fn substitute_args(text: &str, args: &TextArgs) -> String {
    replace_placeholders(text, ARG_OPEN, |name| args.get(name).cloned())
}

/// `open ... }` 형태의 자리표시자를 찾아 치환합니다.
///
/// `resolve`가 `None`을 반환하면 원문을 그대로 둡니다.
/// 치환된 값은 다시 검사하지 않습니다.
fn replace_placeholders<F>(text: &str, open: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find('}') else {
            break;
        };

        out.push_str(&rest[..start]);
        match resolve(after_open[..end].trim()) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + open.len() + end + 1]),
        }
        rest = &after_open[end + 1..];
    }

    out.push_str(rest);
    out
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
