//! OpenAI-compatible chat completions adapter.
//!
//! Works against any server exposing `POST {base_url}/v1/chat/completions`.

pub mod gateway;
pub mod protocol;
pub mod session;

pub use gateway::OpenAiGateway;
pub use session::OpenAiSession;
