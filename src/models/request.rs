use crate::ingest::UploadedFile;

/// Job descriptions at or below this many characters cannot be submitted.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

/// One CV paired with one job description, frozen at submission time.
/// Constructible only when the pairing is valid, so an invalid submission
/// can never reach the gateway.
#[derive(Debug, Clone)]
pub struct OptimizationRequest {
    file: UploadedFile,
    job_description: String,
}

impl OptimizationRequest {
    pub fn new(file: UploadedFile, job_description: String) -> Option<Self> {
        if job_description.chars().count() <= MIN_JOB_DESCRIPTION_CHARS {
            return None;
        }

        Some(Self {
            file,
            job_description,
        })
    }

    /// Whether the submit action should be offered for the given inputs.
    pub fn is_submittable(file: Option<&UploadedFile>, job_description: &str) -> bool {
        file.is_some() && job_description.chars().count() > MIN_JOB_DESCRIPTION_CHARS
    }

    pub fn file(&self) -> &UploadedFile {
        &self.file
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }
}
