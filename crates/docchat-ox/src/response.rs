use serde::{Deserialize, Serialize};

/// Decoded body of a successful `/answer` call.
///
/// The backend guarantees none of these fields; an absent field takes its
/// default (`""`, `false`, `[]`) instead of failing the decode. Unknown
/// extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Answer text to show as the assistant turn.
    #[serde(default)]
    pub answer: String,
    /// Whether the UI should offer the enrollment prompt with this answer.
    #[serde(default)]
    pub show_enroll: bool,
    /// Follow-up questions to offer, replacing the previous set.
    #[serde(default)]
    pub suggested_questions: Vec<String>,
}

/// Decoded body of a successful `/uploadpdf` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Whether the backend accepted and ingested the file. A 2xx response
    /// without this field counts as a rejection.
    #[serde(default)]
    pub success: bool,
}
