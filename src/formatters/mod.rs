pub mod markdown;
pub mod json;
pub mod tone;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
pub use tone::StatusTone;
