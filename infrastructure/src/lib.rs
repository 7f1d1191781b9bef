//! Infrastructure layer for triage-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenAI-compatible gateway, retry
//! decorator, reference example store, report files and configuration
//! file loading.

pub mod catalogue;
pub mod config;
pub mod logging;
pub mod openai;
pub mod report;
pub mod retry;

// Re-export commonly used types
pub use catalogue::{CatalogueError, JsonExampleStore};
pub use config::{
    ConfigLoader, FileConfig, FileDeliberationConfig, FileModelsConfig, FileNormalizerConfig,
    FileOutputConfig, FileProviderConfig, FileRetryConfig,
};
pub use logging::JsonlConversationLogger;
pub use openai::{OpenAiGateway, OpenAiSession};
pub use report::{FileTranscriptSink, ReportDirs, ReportError, ReportWriter, WrittenReports};
pub use retry::RetryingGateway;
