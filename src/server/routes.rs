use crate::battle::DamageRng;
use crate::history::HistorySink;
use crate::server::api::{self, FightPayloadError};
use crate::server::page::index_html;
use crate::session::Session;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }

    fn json(body: String) -> Self {
        Self {
            status_code: 200,
            status_text: "OK",
            content_type: "application/json",
            body,
        }
    }
}

pub fn route_request<H: HistorySink, R: DamageRng>(
    session: &mut Session<H, R>,
    method: &str,
    path: &str,
    body: &str,
) -> HttpResponse {
    let path = path.split('?').next().unwrap_or(path);
    match (method, path) {
        ("GET", "/") | ("GET", "/index.html") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html().to_string(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => HttpResponse::json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/scoreboard") => match api::scoreboard_payload(&session.scoreboard()) {
            Ok(payload) => HttpResponse::json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/fight") => match api::fight_payload(session, body) {
            Ok(payload) => HttpResponse::json(payload),
            Err(FightPayloadError::Parse(err)) => {
                error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
            }
            Err(FightPayloadError::UnknownWeapon(err)) => {
                error_response(400, "Bad Request", &err.to_string())
            }
            Err(FightPayloadError::Rejected(err)) => match api::rejected_payload(err) {
                Ok(payload) => HttpResponse {
                    status_code: 422,
                    status_text: "Unprocessable Entity",
                    content_type: "application/json",
                    body: payload,
                },
                Err(encode) => error_response(500, "Internal Server Error", &encode.to_string()),
            },
            Err(err @ (FightPayloadError::History(_) | FightPayloadError::Encode(_))) => {
                tracing::error!(%err, "round could not be recorded");
                error_response(500, "Internal Server Error", &err.to_string())
            }
        },
        _ => error_response(404, "Not Found", "Not found"),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}
