#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

pub mod client;
pub mod conversation;
pub mod error;
mod internal;
pub mod request;
pub mod response;

// Re-export main types
pub use client::{DocChat, ENDPOINT_ENV};
pub use conversation::{
    ChatTurn, Conversation, ERROR_REPLY, QueryBackend, Role, SUGGESTION_LABEL_CHARS,
    truncate_question_label,
};
pub use error::DocChatRequestError;
pub use request::{PdfUpload, QueryRequest};
pub use response::{ChatResponse, UploadResponse};
