use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::config::AiConfig;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// AI 질의 시 발생 가능한 오류.
#[derive(Debug, Clone)]
pub enum AskError {
    /// API 키 환경 변수가 비어 있음
    MissingKey(String),
    /// 네트워크/전송 오류
    Network(String),
    /// API가 오류 상태 코드로 응답
    Api { status: u16, message: String },
    /// 응답은 왔지만 본문에 텍스트가 없음
    EmptyResponse,
    /// 응답 본문 파싱 실패
    Parse(String),
}

impl std::fmt::Display for AskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AskError::MissingKey(var) => write!(f, "API 키 환경 변수가 설정되지 않음: {var}"),
            AskError::Network(e) => write!(f, "네트워크 오류: {e}"),
            AskError::Api { status, message } => write!(f, "API 오류({status}): {message}"),
            AskError::EmptyResponse => write!(f, "모델 응답이 비어 있음"),
            AskError::Parse(e) => write!(f, "응답 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for AskError {}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// 자유 텍스트 질문 하나를 모델에 보내고 응답 텍스트를 받는다.
///
/// 호출 한 번에 응답 한 번. 재시도/백오프는 하지 않으며 타임아웃만 건다.
/// 블로킹 호출이므로 UI 스레드에서는 완료까지 대기하게 된다.
pub fn ask(cfg: &AiConfig, prompt: &str) -> Result<String, AskError> {
    let api_key = env::var(&cfg.api_key_env)
        .ok()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AskError::MissingKey(cfg.api_key_env.clone()))?;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()
        .map_err(|e| AskError::Network(e.to_string()))?;

    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    };

    let url = format!("{API_BASE}/{}:generateContent", cfg.model);
    let response = client
        .post(&url)
        .query(&[("key", api_key.as_str())])
        .json(&request)
        .send()
        .map_err(|e| AskError::Network(e.to_string()))?;

    let status = response.status();
    let body = response.text().map_err(|e| AskError::Network(e.to_string()))?;

    if !status.is_success() {
        if let Ok(err) = serde_json::from_str::<ApiErrorBody>(&body) {
            return Err(AskError::Api {
                status: status.as_u16(),
                message: err.error.message,
            });
        }
        return Err(AskError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    parse_response(&body)
}

/// 응답 본문에서 후보 텍스트를 모은다. 파트가 여러 개면 이어 붙인다.
fn parse_response(body: &str) -> Result<String, AskError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| AskError::Parse(e.to_string()))?;
    let text = parsed
        .candidates
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AskError::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_candidate() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"42."}],"role":"model"}}]}"#;
        assert_eq!(parse_response(body).unwrap(), "42.");
    }

    #[test]
    fn parse_joins_multiple_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"one "},{"text":"two"}]}}]}"#;
        assert_eq!(parse_response(body).unwrap(), "one two");
    }

    #[test]
    fn parse_empty_candidates() {
        let body = r#"{"candidates":[]}"#;
        assert!(matches!(parse_response(body), Err(AskError::EmptyResponse)));
    }

    #[test]
    fn parse_missing_candidates_field() {
        let body = r#"{}"#;
        assert!(matches!(parse_response(body), Err(AskError::EmptyResponse)));
    }
}
