use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::{debug, info};
use serde_json::{Value, json};
use thiserror::Error;

use crate::ingest::CvContent;
use crate::models::request::OptimizationRequest;
use crate::models::result::OptimizationResult;

const SYSTEM_PROMPT: &str = include_str!("system_prompt.txt");

/// Everything that can go wrong between submission and a typed result.
/// The interactive layer collapses all of these into one generic banner;
/// the distinction exists for the logs.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("no response generated")]
    EmptyResponse,

    #[error("response did not match the expected shape: {0}")]
    InvalidShape(String),
}

/// Single point of contact with the Gemini API: one request, one
/// response, no retries, no streaming. Timeouts are left to the
/// transport defaults.
pub struct CvOptimizer {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl CvOptimizer {
    pub fn new(api_key: String, model: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            endpoint,
        }
    }

    pub async fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, GatewayError> {
        info!(
            "optimizing {} against a {}-character job description (model: {})",
            request.file().name,
            request.job_description().chars().count(),
            self.model
        );

        let body = build_request_body(request);
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Value = response.json().await?;
        let text = candidate_text(&envelope).ok_or(GatewayError::EmptyResponse)?;

        debug!("model returned {} characters", text.len());

        parse_result(text)
    }
}

/// Assembles the multi-part `generateContent` body: the CV (inline PDF
/// attachment or labeled text), the labeled job description, the fixed
/// system instruction and the fixed response schema.
fn build_request_body(request: &OptimizationRequest) -> Value {
    let cv_part = match &request.file().content {
        CvContent::Pdf(bytes) => json!({
            "inlineData": {
                "mimeType": "application/pdf",
                "data": BASE64.encode(bytes),
            }
        }),
        CvContent::Text(text) => json!({
            "text": format!("ORIGINAL CV CONTENT:\n{text}"),
        }),
    };

    let jd_part = json!({
        "text": format!("\n\nTARGET JOB DESCRIPTION:\n{}", request.job_description()),
    });

    json!({
        "contents": [{ "parts": [cv_part, jd_part] }],
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_PROMPT }]
        },
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseJsonSchema": response_schema(),
        }
    })
}

fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "originalScore": {
                "type": "integer",
                "description": "ATS score of the original CV (0-100)"
            },
            "optimizedScore": {
                "type": "integer",
                "description": "ATS score of the optimized CV (0-100)"
            },
            "improvements": {
                "type": "object",
                "properties": {
                    "keywordsAdded": { "type": "array", "items": { "type": "string" } },
                    "skillsOptimized": { "type": "array", "items": { "type": "string" } },
                    "experienceRewritten": { "type": "array", "items": { "type": "string" } },
                    "metricsIntroduced": { "type": "array", "items": { "type": "string" } }
                }
            },
            "latexCode": {
                "type": "string",
                "description": "Complete LaTeX code using ModernCV banking style"
            },
            "previewData": {
                "type": "object",
                "properties": {
                    "fullName": { "type": "string" },
                    "title": { "type": "string" },
                    "contactInfo": {
                        "type": "object",
                        "properties": {
                            "email": { "type": "string" },
                            "phone": { "type": "string" },
                            "location": { "type": "string" },
                            "linkedin": { "type": "string" }
                        }
                    },
                    "summary": { "type": "string" },
                    "experience": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "company": { "type": "string" },
                                "role": { "type": "string" },
                                "dates": { "type": "string" },
                                "location": { "type": "string" },
                                "bullets": { "type": "array", "items": { "type": "string" } }
                            }
                        }
                    },
                    "education": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "institution": { "type": "string" },
                                "degree": { "type": "string" },
                                "dates": { "type": "string" }
                            }
                        }
                    },
                    "skills": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "category": { "type": "string" },
                                "items": { "type": "array", "items": { "type": "string" } }
                            }
                        }
                    }
                }
            }
        },
        "required": ["originalScore", "optimizedScore", "improvements", "latexCode", "previewData"]
    })
}

fn candidate_text(envelope: &Value) -> Option<&str> {
    envelope
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .filter(|t| !t.trim().is_empty())
}

/// Strict deserialization of the model's JSON text. The declared schema
/// is not trusted: a raw parse that succeeds but misses fields or carries
/// out-of-range scores is reported as `InvalidShape`.
fn parse_result(text: &str) -> Result<OptimizationResult, GatewayError> {
    let trimmed = text.trim();
    let start = trimmed
        .find('{')
        .ok_or_else(|| GatewayError::InvalidShape("no JSON object in response".to_string()))?;
    let end = trimmed
        .rfind('}')
        .ok_or_else(|| GatewayError::InvalidShape("malformed JSON in response".to_string()))?;

    let result: OptimizationResult = serde_json::from_str(&trimmed[start..=end])
        .map_err(|e| GatewayError::InvalidShape(e.to_string()))?;

    for (field, score) in [
        ("originalScore", result.original_score),
        ("optimizedScore", result.optimized_score),
    ] {
        if score > 100 {
            return Err(GatewayError::InvalidShape(format!(
                "{field} is {score}, outside 0-100"
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::UploadedFile;

    const VALID_RESPONSE_TEXT: &str = r#"{
        "originalScore": 45,
        "optimizedScore": 92,
        "improvements": {
            "keywordsAdded": ["Kubernetes"],
            "skillsOptimized": [],
            "experienceRewritten": ["Led migration to event-driven architecture"],
            "metricsIntroduced": ["Cut infra spend by 30%"]
        },
        "latexCode": "\\documentclass{moderncv}",
        "previewData": {
            "fullName": "Jane Doe",
            "title": "Engineer",
            "contactInfo": {},
            "summary": "Summary.",
            "experience": [],
            "education": [],
            "skills": []
        }
    }"#;

    fn pdf_request() -> OptimizationRequest {
        let file = UploadedFile {
            name: "resume.pdf".to_string(),
            content: CvContent::Pdf(vec![0x25, 0x50, 0x44, 0x46]),
        };
        OptimizationRequest::new(file, "x".repeat(120)).unwrap()
    }

    fn text_request() -> OptimizationRequest {
        let file = UploadedFile {
            name: "resume.txt".to_string(),
            content: CvContent::Text("Experienced engineer...".to_string()),
        };
        OptimizationRequest::new(file, "y".repeat(120)).unwrap()
    }

    #[test]
    fn test_pdf_cv_becomes_inline_attachment() {
        let body = build_request_body(&pdf_request());
        let parts = &body["contents"][0]["parts"];

        assert_eq!(parts[0]["inlineData"]["mimeType"], "application/pdf");
        // base64 of %PDF
        assert_eq!(parts[0]["inlineData"]["data"], "JVBERg==");
        assert!(
            parts[1]["text"]
                .as_str()
                .unwrap()
                .contains("TARGET JOB DESCRIPTION:")
        );
    }

    #[test]
    fn test_text_cv_becomes_labeled_text_part() {
        let body = build_request_body(&text_request());
        let parts = &body["contents"][0]["parts"];

        let cv_text = parts[0]["text"].as_str().unwrap();
        assert!(cv_text.starts_with("ORIGINAL CV CONTENT:\n"));
        assert!(cv_text.contains("Experienced engineer..."));
        assert!(parts[0].get("inlineData").is_none());
    }

    #[test]
    fn test_request_carries_instruction_and_schema() {
        let body = build_request_body(&text_request());

        assert!(
            body["systemInstruction"]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("ATS optimization specialist")
        );
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );

        let required = &body["generationConfig"]["responseJsonSchema"]["required"];
        assert_eq!(required.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_candidate_text_extraction() {
        let envelope = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "hello" }] }
            }]
        });
        assert_eq!(candidate_text(&envelope), Some("hello"));
    }

    #[test]
    fn test_empty_candidate_text_is_treated_as_missing() {
        let envelope = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "   " }] }
            }]
        });
        assert_eq!(candidate_text(&envelope), None);
        assert_eq!(candidate_text(&json!({})), None);
    }

    #[test]
    fn test_parse_result_accepts_schema_valid_json() {
        let result = parse_result(VALID_RESPONSE_TEXT).unwrap();
        assert_eq!(result.original_score, 45);
        assert_eq!(result.optimized_score, 92);
    }

    #[test]
    fn test_parse_result_tolerates_surrounding_noise() {
        let noisy = format!("```json\n{VALID_RESPONSE_TEXT}\n```");
        assert!(parse_result(&noisy).is_ok());
    }

    #[test]
    fn test_missing_field_is_invalid_shape() {
        let json = r#"{ "originalScore": 45, "optimizedScore": 92 }"#;
        assert!(matches!(
            parse_result(json),
            Err(GatewayError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_out_of_range_score_is_invalid_shape() {
        let json = VALID_RESPONSE_TEXT.replace("\"optimizedScore\": 92", "\"optimizedScore\": 150");
        let err = parse_result(&json).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidShape(_)));
        assert!(err.to_string().contains("outside 0-100"));
    }

    #[test]
    fn test_non_json_text_is_invalid_shape() {
        assert!(matches!(
            parse_result("I could not process this CV."),
            Err(GatewayError::InvalidShape(_))
        ));
    }
}
