//! Conversation transcript and suggested-question state.
//!
//! One `Conversation` is owned by one UI session and mutated only through
//! [`Conversation::submit`]. The UI surface re-renders from its accessors
//! after every submit and is expected to serialize submissions; there is
//! no internal locking.

use serde::{Deserialize, Serialize};

use crate::{error::DocChatRequestError, response::ChatResponse};

/// Reply shown in place of an answer when the backend call fails.
pub const ERROR_REPLY: &str =
    "I'm sorry, I encountered an error while processing your request. Please try again.";

/// Default label length for suggested-question buttons.
pub const SUGGESTION_LABEL_CHARS: usize = 50;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person typing queries.
    User,
    /// The backend's answer, or the local error reply standing in for one.
    Assistant,
}

/// One entry in the transcript. Turns are immutable once appended and are
/// never removed for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Author of the turn.
    pub role: Role,
    /// Turn text.
    pub content: String,
    /// Whether the UI should offer the enrollment prompt alongside this
    /// turn. Only meaningful on assistant turns; always `false` on user
    /// turns.
    #[serde(default)]
    pub show_enroll: bool,
}

impl ChatTurn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            show_enroll: false,
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>, show_enroll: bool) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            show_enroll,
        }
    }
}

/// Backend seam for [`Conversation::submit`].
///
/// Implemented by [`DocChat`](crate::DocChat); test doubles stand in for
/// the wire so state transitions can be driven without a network.
pub trait QueryBackend {
    /// Submit one query and return the decoded response or a tagged
    /// failure.
    async fn send_query(&self, query: &str) -> Result<ChatResponse, DocChatRequestError>;
}

/// In-memory chat transcript plus the currently offered suggested
/// questions.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    /// Chronological, append-only turn list.
    history: Vec<ChatTurn>,
    /// Suggestions from the most recent successful query.
    suggested_questions: Vec<String>,
}

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// All turns, oldest first.
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Suggestions to offer below the transcript. Selecting one is just a
    /// `submit` with that question's text.
    pub fn suggested_questions(&self) -> &[String] {
        &self.suggested_questions
    }

    /// Number of turns in the transcript.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether no turn has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Submit a query: append the user turn, ask the backend, and fold
    /// the outcome into the transcript.
    ///
    /// The user turn is appended before the request goes out, so the UI
    /// can show it (plus an in-progress indicator) while awaiting. Every
    /// submit appends exactly one assistant turn once the request
    /// resolves: the answer on success, [`ERROR_REPLY`] on failure. The
    /// await on the backend is the only suspension point.
    pub async fn submit(&mut self, backend: &impl QueryBackend, query: impl Into<String>) {
        let query = query.into();
        self.history.push(ChatTurn::user(query.clone()));

        match backend.send_query(&query).await {
            Ok(response) => {
                self.history
                    .push(ChatTurn::assistant(response.answer, response.show_enroll));
                self.suggested_questions = response.suggested_questions;
            }
            Err(_) => {
                // The last good suggestion list stays in place; only a
                // successful response replaces it. The diagnostic was
                // already emitted by the client.
                self.history.push(ChatTurn::assistant(ERROR_REPLY, false));
            }
        }
    }
}

/// Button label for a suggested question: the first `max` characters,
/// with an ellipsis appended when the question is longer.
pub fn truncate_question_label(question: &str, max: usize) -> String {
    if question.chars().count() <= max {
        question.to_string()
    } else {
        let mut label: String = question.chars().take(max).collect();
        label.push_str("...");
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(truncate_question_label("What is RAG?", 50), "What is RAG?");
    }

    #[test]
    fn boundary_length_is_not_truncated() {
        let question = "q".repeat(50);
        assert_eq!(truncate_question_label(&question, 50), question);
    }

    #[test]
    fn long_labels_get_an_ellipsis() {
        let question = "q".repeat(51);
        let label = truncate_question_label(&question, 50);
        assert_eq!(label.chars().count(), 53);
        assert!(label.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let question = "å".repeat(60);
        let label = truncate_question_label(&question, SUGGESTION_LABEL_CHARS);
        assert_eq!(label, format!("{}...", "å".repeat(50)));
    }
}
