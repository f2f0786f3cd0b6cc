//! 메일 발송 요청 DTO

pub mod request;

pub use request::SendMailRequest;
