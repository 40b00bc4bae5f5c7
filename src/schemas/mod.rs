pub mod message;

pub use message::{ChatMessage, ResultContent, ResultStatus, ToolInvocation, ToolResultMessage};
