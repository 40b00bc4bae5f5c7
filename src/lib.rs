pub mod formatters;
pub mod interactive;
pub mod schemas;
pub mod transcript;

pub use formatters::{DisplayContent, is_complex, parse_result_content};
pub use schemas::{ChatMessage, ResultContent, ResultStatus, ToolInvocation, ToolResultMessage};
pub use transcript::load_transcript;
