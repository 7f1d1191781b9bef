//! Structured conversation logging.
//!
//! [`JsonlConversationLogger`] appends every model exchange of a run to a
//! JSONL file through the
//! [`ConversationLogger`](triage_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
