use serde::{Deserialize, Serialize};

/// The single authoritative response object for an optimization session.
/// Deserialized straight from the model's JSON output (camelCase on the
/// wire), then treated as immutable until the session is reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// ATS score of the original CV (0-100).
    pub original_score: u8,
    /// ATS score of the optimized CV (0-100).
    pub optimized_score: u8,
    pub improvements: Improvements,
    /// Complete LaTeX source (moderncv, banking style, blue).
    pub latex_code: String,
    pub preview_data: CvPreview,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvements {
    #[serde(default)]
    pub keywords_added: Vec<String>,
    #[serde(default)]
    pub skills_optimized: Vec<String>,
    #[serde(default)]
    pub experience_rewritten: Vec<String>,
    #[serde(default)]
    pub metrics_introduced: Vec<String>,
}

/// Structured (non-LaTeX) representation of the rewritten CV, used to
/// render the visual dashboard view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvPreview {
    pub full_name: String,
    pub title: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub dates: String,
    pub location: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub dates: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA_VALID_RESPONSE: &str = r#"{
        "originalScore": 45,
        "optimizedScore": 92,
        "improvements": {
            "keywordsAdded": ["Kubernetes", "CI/CD"],
            "skillsOptimized": ["Rust", "Distributed systems"],
            "experienceRewritten": ["Led a team of 4 engineers shipping a payments platform"],
            "metricsIntroduced": ["Reduced p99 latency by 40%"]
        },
        "latexCode": "\\documentclass[11pt,a4paper,sans]{moderncv}\\moderncvstyle{banking}\\moderncvcolor{blue}",
        "previewData": {
            "fullName": "Jane Doe",
            "title": "Senior Software Engineer",
            "contactInfo": { "email": "jane@example.com", "phone": "+1 555 0100" },
            "summary": "Experienced engineer with a track record of shipping reliable systems.",
            "experience": [
                {
                    "company": "Acme Corp",
                    "role": "Senior Software Engineer",
                    "dates": "2021 - Present",
                    "location": "Remote",
                    "bullets": ["Reduced p99 latency by 40%"]
                }
            ],
            "education": [
                { "institution": "State University", "degree": "BSc Computer Science", "dates": "2013 - 2017" }
            ],
            "skills": [
                { "category": "Languages", "items": ["Rust", "Python"] }
            ]
        }
    }"#;

    #[test]
    fn test_parse_schema_valid_response() {
        let result: OptimizationResult = serde_json::from_str(SCHEMA_VALID_RESPONSE).unwrap();

        assert_eq!(result.original_score, 45);
        assert_eq!(result.optimized_score, 92);
        assert_eq!(result.improvements.keywords_added.len(), 2);
        assert_eq!(result.preview_data.full_name, "Jane Doe");
        assert_eq!(result.preview_data.experience[0].company, "Acme Corp");
        assert_eq!(
            result.preview_data.contact_info.email.as_deref(),
            Some("jane@example.com")
        );
        assert!(result.preview_data.contact_info.linkedin.is_none());
    }

    #[test]
    fn test_missing_latex_code_is_rejected() {
        let json = r#"{
            "originalScore": 45,
            "optimizedScore": 92,
            "improvements": {},
            "previewData": {
                "fullName": "Jane Doe",
                "title": "Engineer",
                "summary": "Summary."
            }
        }"#;

        assert!(serde_json::from_str::<OptimizationResult>(json).is_err());
    }

    #[test]
    fn test_improvement_lists_default_to_empty() {
        let json = r#"{
            "originalScore": 10,
            "optimizedScore": 90,
            "improvements": {},
            "latexCode": "\\documentclass{moderncv}",
            "previewData": {
                "fullName": "Jane Doe",
                "title": "Engineer",
                "summary": "Summary."
            }
        }"#;

        let result: OptimizationResult = serde_json::from_str(json).unwrap();
        assert!(result.improvements.keywords_added.is_empty());
        assert!(result.improvements.metrics_introduced.is_empty());
        assert!(result.preview_data.experience.is_empty());
    }
}
