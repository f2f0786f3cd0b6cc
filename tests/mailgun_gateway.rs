//! Mailgun 게이트웨이 통합 테스트
//!
//! 프로세스 내 actix 서버를 Mailgun API 대역으로 띄워
//! 실제 HTTP 요청 형식(경로, Basic 인증, 폼 필드)과 응답 처리를 검증합니다.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use actix_web::{http::{header, StatusCode}, web, App, HttpRequest, HttpResponse, HttpServer};
use futures_util::stream;
use users_service_backend::{
    config::{MailgunConfig, SenderConfig},
    domain::models::mail::MailMessage,
    errors::AppError,
    services::{
        email::{EmailService, MailGateway, MailgunGateway},
        text::{BundleTextService, TextArgs, TextService},
    },
};

#[derive(Debug, Clone)]
struct RecordedRequest {
    path: String,
    authorization: Option<String>,
    form: HashMap<String, String>,
}

struct FakeMailgun {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn messages(
    request: HttpRequest,
    form: web::Form<HashMap<String, String>>,
    state: web::Data<FakeMailgun>,
) -> HttpResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: request.path().to_string(),
        authorization: request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from),
        form: form.into_inner(),
    });

    HttpResponse::build(state.status)
        .content_type("application/json")
        .body(state.body)
}

/// 가짜 Mailgun 서버를 띄우고 (api-base, 기록된 요청) 을 반환
fn start_fake_mailgun(
    status: StatusCode,
    body: &'static str,
) -> (String, Arc<Mutex<Vec<RecordedRequest>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(FakeMailgun {
        status,
        body,
        requests: requests.clone(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/v3/{domain}/messages", web::post().to(messages))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();

    let address = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    (format!("http://{}", address), requests)
}

/// 본문 전송 도중 연결을 끊는 가짜 Mailgun 서버
fn start_truncating_mailgun(status: StatusCode) -> String {
    let server = HttpServer::new(move || {
        App::new().route(
            "/v3/{domain}/messages",
            web::post().to(move || async move {
                let chunks = vec![
                    Ok(web::Bytes::from_static(br#"{"mess"#)),
                    Err(std::io::Error::other("connection cut")),
                ];
                HttpResponse::build(status)
                    .content_type("application/json")
                    .streaming(stream::iter(chunks))
            }),
        )
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();

    let address = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    format!("http://{}", address)
}

fn gateway(api_base: &str) -> MailgunGateway {
    MailgunGateway::new(MailgunConfig {
        api_key: "key-test".to_string(),
        domain: "mg.example.com".to_string(),
        api_base: api_base.to_string(),
    })
    .unwrap()
}

fn message() -> MailMessage {
    MailMessage {
        subject: "Welcome".to_string(),
        from: "Example <noreply@example.com>".to_string(),
        to: MailMessage::recipient("Jane Doe", "jane@example.com"),
        html: "<p>Hello & welcome</p>\n<p>Line two</p>".to_string(),
    }
}

#[actix_web::test]
async fn delivers_form_with_basic_auth() {
    let (api_base, requests) = start_fake_mailgun(
        StatusCode::OK,
        r#"{"id":"<20240101.1@mg.example.com>","message":"Queued. Thank you."}"#,
    );

    let receipt = gateway(&api_base).deliver(&message()).await.unwrap();

    assert_eq!(receipt.id.as_deref(), Some("<20240101.1@mg.example.com>"));
    assert_eq!(receipt.message.as_deref(), Some("Queued. Thank you."));

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);

    let recorded = &requests[0];
    assert_eq!(recorded.path, "/v3/mg.example.com/messages");
    assert_eq!(recorded.authorization.as_deref(), Some("Basic YXBpOmtleS10ZXN0"));
    assert_eq!(recorded.form["subject"], "Welcome");
    assert_eq!(recorded.form["from"], "Example <noreply@example.com>");
    assert_eq!(recorded.form["to"], "Jane Doe <jane@example.com>");
    assert_eq!(recorded.form["html"], "<p>Hello & welcome</p>\n<p>Line two</p>");
}

#[actix_web::test]
async fn rejection_carries_gateway_message() {
    let (api_base, requests) =
        start_fake_mailgun(StatusCode::PAYMENT_REQUIRED, r#"{"message":"quota exceeded"}"#);

    let error = gateway(&api_base).deliver(&message()).await.unwrap_err();

    match &error {
        AppError::DeliveryError(message) => assert_eq!(message, "quota exceeded"),
        other => panic!("expected DeliveryError, got {:?}", other),
    }
    assert!(error.to_string().contains("quota exceeded"));
    assert_eq!(requests.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn rejection_without_body_is_still_delivery_error() {
    let (api_base, _) = start_fake_mailgun(StatusCode::INTERNAL_SERVER_ERROR, "");

    match gateway(&api_base).deliver(&message()).await {
        Err(AppError::DeliveryError(message)) => assert!(message.contains("500"), "{}", message),
        other => panic!("expected DeliveryError, got {:?}", other),
    }
}

#[actix_web::test]
async fn truncated_rejection_body_is_delivery_error() {
    let api_base = start_truncating_mailgun(StatusCode::INTERNAL_SERVER_ERROR);

    match gateway(&api_base).deliver(&message()).await {
        Err(AppError::DeliveryError(message)) => assert!(message.contains("500"), "{}", message),
        other => panic!("expected DeliveryError, got {:?}", other),
    }
}

#[actix_web::test]
async fn truncated_success_body_still_counts_as_sent() {
    let api_base = start_truncating_mailgun(StatusCode::OK);

    let receipt = gateway(&api_base).deliver(&message()).await.unwrap();

    assert!(receipt.id.is_none());
    assert!(receipt.message.is_none());
}

#[actix_web::test]
async fn unreachable_gateway_is_external_service_error() {
    let result = gateway("http://127.0.0.1:1").deliver(&message()).await;

    assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
}

#[actix_web::test]
async fn sends_bundled_template_end_to_end() {
    let (api_base, requests) = start_fake_mailgun(StatusCode::OK, r#"{"id":"<2@mg.example.com>"}"#);

    let resources = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources");
    let text = BundleTextService::load_dir(&resources.join("text")).unwrap();
    let service = EmailService::new(
        Arc::new(text),
        Arc::new(gateway(&api_base)),
        SenderConfig {
            site_name: "Example".to_string(),
            sender: "noreply@example.com".to_string(),
        },
        resources.join("mail"),
    );

    let args: TextArgs = [
        ("name", "Jane"),
        ("site", "Example"),
        ("link", "https://example.com/confirm/abc"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    service
        .send("Jane Doe", "jane@example.com", "user_welcome", Some("sv"), &args)
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);

    let form = &requests[0].form;
    assert_eq!(form["subject"], "Välkommen till Example, Jane!");
    assert_eq!(form["from"], "Example <noreply@example.com>");
    assert_eq!(form["to"], "Jane Doe <jane@example.com>");
    assert!(form["html"].contains("Hej Jane,"));
    assert!(form["html"].contains("https://example.com/confirm/abc"));
    assert!(!form["html"].contains("#{"));
    assert!(!form["html"].contains("${"));
}

#[actix_web::test]
async fn bundled_templates_have_subjects_in_every_language() {
    let resources = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources");
    let text = BundleTextService::load_dir(&resources.join("text")).unwrap();

    for template in ["user_welcome", "password_reset"] {
        assert!(resources.join("mail").join(format!("{}.html", template)).is_file());

        let key = format!("{}.subject", template.replace('_', "."));
        for language in text.languages() {
            assert_ne!(text.get(&key, language, &TextArgs::new()), key, "{} ({})", key, language);
        }
    }
}
